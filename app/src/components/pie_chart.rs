use yew::prelude::*;

use crate::analytics::{slice_path, PieSlice};

const SIZE: f64 = 200.0;

#[derive(Properties, PartialEq)]
pub struct PieChartProps {
    pub slices: Vec<PieSlice>,
}

#[function_component(PieChart)]
pub fn pie_chart(props: &PieChartProps) -> Html {
    let c = SIZE / 2.0;
    let r = c - 4.0;

    html! {
        <div class="pie-chart">
            <svg viewBox={format!("0 0 {SIZE} {SIZE}")} width="200" height="200" role="img">
                { for props.slices.iter().map(|s| html! {
                    <path key={s.platform.id} d={slice_path(c, c, r, s)} fill={s.platform.color}>
                        <title>{ format!("{}: {:.1}%", s.platform.name, s.fraction * 100.0) }</title>
                    </path>
                }) }
            </svg>
            <ul class="pie-legend">
                { for props.slices.iter().map(|s| html! {
                    <li key={s.platform.id}>
                        <span class="swatch" style={format!("background-color: {}", s.platform.color)} />
                        <span>{ s.platform.name }</span>
                        <span class="muted">{ format!("{:.1}%", s.fraction * 100.0) }</span>
                    </li>
                }) }
            </ul>
        </div>
    }
}
