use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::i18n::use_language;
use crate::route::{navigate, Route};
use crate::services::use_services;
use crate::session::{clear_session, save_session, use_session};
use crate::settings::{
    delete_confirmation_prompt, submit_account_deletion, submit_password, submit_profile,
};
use crate::subdomain::build_subdomain_url;
use crate::toast::use_toaster;

#[derive(Debug, Clone, Default, PartialEq)]
struct ProfileDraft {
    username: String,
    email: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct PasswordDraft {
    current: String,
    new: String,
    confirm: String,
}

fn input_value(e: &InputEvent) -> Option<String> {
    e.target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        .map(|i| i.value())
}

fn bind_input<T: Clone + 'static>(draft: UseStateHandle<T>, mutator: fn(&mut T, String)) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        if let Some(value) = input_value(&e) {
            let mut next = (*draft).clone();
            mutator(&mut next, value);
            draft.set(next);
        }
    })
}

fn field(id: &str, label: &str, kind: &str, value: &str, oninput: Callback<InputEvent>) -> Html {
    html! {
        <div class="field">
            <label for={id.to_string()}>{ label }</label>
            <input id={id.to_string()} type={kind.to_string()} value={value.to_string()} {oninput} />
        </div>
    }
}

#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let services = use_services();
    let session = use_session();
    let i18n = use_language();
    let toaster = use_toaster();

    let profile = {
        let session = session.clone();
        use_state(move || {
            (*session)
                .as_ref()
                .map(|s| ProfileDraft {
                    username: s.user.username.clone(),
                    email: s.user.email.clone(),
                })
                .unwrap_or_default()
        })
    };
    let profile_busy = use_state(|| false);
    let password = use_state(PasswordDraft::default);
    let password_busy = use_state(|| false);
    let show_delete = use_state(|| false);
    let delete_text = use_state(String::new);
    let delete_busy = use_state(|| false);

    let Some(current) = (*session).clone() else {
        return html! {
            <div class="page-center">
                <p class="muted">{ i18n.t("settings", "signInRequired") }</p>
            </div>
        };
    };

    let client = ApiClient::new(&services.config, Some(current.token.clone()));

    let on_profile = {
        let client = client.clone();
        let profile = profile.clone();
        let busy = profile_busy.clone();
        let session = session.clone();
        let i18n = i18n.clone();
        let toaster = toaster.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let client = client.clone();
            let draft = (*profile).clone();
            let busy = busy.clone();
            let session = session.clone();
            let i18n = i18n.clone();
            let toaster = toaster.clone();
            busy.set(true);
            spawn_local(async move {
                match submit_profile(&client, &draft.username, &draft.email).await {
                    Ok(update) => {
                        if let Some(mut s) = (*session).clone() {
                            s.user.username = update.username;
                            s.user.email = update.email;
                            save_session(&s);
                            session.set(Some(s));
                        }
                        toaster.success(i18n.t("settings", "settingsSaved"));
                    }
                    Err(e) => {
                        log::warn!("profile update failed: {e}");
                        toaster.error(e.user_message(&i18n, ("errors", "saveFailed")));
                    }
                }
                busy.set(false);
            });
        })
    };

    let on_password = {
        let client = client.clone();
        let password = password.clone();
        let busy = password_busy.clone();
        let i18n = i18n.clone();
        let toaster = toaster.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let client = client.clone();
            let password = password.clone();
            let busy = busy.clone();
            let i18n = i18n.clone();
            let toaster = toaster.clone();
            let draft = (*password).clone();
            busy.set(true);
            spawn_local(async move {
                match submit_password(&client, &draft.current, &draft.new, &draft.confirm).await {
                    Ok(()) => {
                        password.set(PasswordDraft::default());
                        toaster.success(i18n.t("settings", "settingsSaved"));
                    }
                    Err(e) => {
                        log::warn!("password change failed: {e}");
                        toaster.error(e.user_message(&i18n, ("errors", "saveFailed")));
                    }
                }
                busy.set(false);
            });
        })
    };

    let on_delete = {
        let client = client.clone();
        let delete_text = delete_text.clone();
        let busy = delete_busy.clone();
        let i18n = i18n.clone();
        let toaster = toaster.clone();
        Callback::from(move |_: MouseEvent| {
            let client = client.clone();
            let typed = (*delete_text).clone();
            let locale = i18n.language();
            let busy = busy.clone();
            let i18n = i18n.clone();
            let toaster = toaster.clone();
            busy.set(true);
            spawn_local(async move {
                match submit_account_deletion(&client, &typed, locale).await {
                    Ok(()) => {
                        toaster.success(i18n.t("common", "success"));
                        clear_session();
                        navigate(&Route::Home);
                    }
                    Err(e) => {
                        log::warn!("account deletion failed: {e}");
                        toaster.error(e.user_message(&i18n, ("errors", "deleteFailed")));
                        busy.set(false);
                    }
                }
            });
        })
    };

    let reveal_delete = {
        let show_delete = show_delete.clone();
        Callback::from(move |_: MouseEvent| show_delete.set(true))
    };
    let cancel_delete = {
        let show_delete = show_delete.clone();
        let delete_text = delete_text.clone();
        Callback::from(move |_: MouseEvent| {
            show_delete.set(false);
            delete_text.set(String::new());
        })
    };
    let on_delete_text = {
        let delete_text = delete_text.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = input_value(&e) {
                delete_text.set(value);
            }
        })
    };

    let delete_word = i18n.delete_confirmation_word();
    let public_url = build_subdomain_url(&services.config, &current.user.username, "");
    let busy_label = |busy: bool, idle: String| if busy { i18n.t("common", "loading") } else { idle };

    html! {
        <div class="settings-page">
            <header class="page-header">
                <h1>{ i18n.t("settings", "title") }</h1>
                <p class="muted">{ format!("{} & {}", i18n.t("settings", "profile"), i18n.t("settings", "security")) }</p>
            </header>

            <section class="card">
                <h2>{ i18n.t("settings", "profile") }</h2>
                <p class="muted">{ i18n.t("settings", "changeEmail") }</p>
                <p class="public-url">
                    <span class="muted">{ i18n.t("settings", "publicPage") }{ ": " }</span>
                    <a href={public_url.clone()} target="_blank" rel="noopener">{ public_url.clone() }</a>
                </p>
                <form onsubmit={on_profile}>
                    { field("username", &i18n.t("common", "username"), "text", &profile.username,
                        bind_input(profile.clone(), |d: &mut ProfileDraft, v| d.username = v)) }
                    { field("email", &i18n.t("common", "email"), "email", &profile.email,
                        bind_input(profile.clone(), |d: &mut ProfileDraft, v| d.email = v)) }
                    <button class="btn btn-primary" type="submit" disabled={*profile_busy}>
                        { busy_label(*profile_busy, i18n.t("common", "save")) }
                    </button>
                </form>
            </section>

            <section class="card">
                <h2>{ i18n.t("settings", "security") }</h2>
                <p class="muted">{ i18n.t("settings", "changePassword") }</p>
                <form onsubmit={on_password}>
                    { field("current_password", &i18n.t("settings", "currentPassword"), "password", &password.current,
                        bind_input(password.clone(), |d: &mut PasswordDraft, v| d.current = v)) }
                    { field("new_password", &i18n.t("settings", "newPassword"), "password", &password.new,
                        bind_input(password.clone(), |d: &mut PasswordDraft, v| d.new = v)) }
                    { field("confirm_password", &i18n.t("settings", "confirmNewPassword"), "password", &password.confirm,
                        bind_input(password.clone(), |d: &mut PasswordDraft, v| d.confirm = v)) }
                    <button class="btn btn-primary" type="submit" disabled={*password_busy}>
                        { busy_label(*password_busy, i18n.t("settings", "changePassword")) }
                    </button>
                </form>
            </section>

            if !current.user.is_admin() {
                <section class="card danger-zone">
                    <h2>{ i18n.t("settings", "deleteAccount") }</h2>
                    <p>{ i18n.t("settings", "deleteAccountWarning") }</p>
                    if *show_delete {
                        <div class="delete-confirm">
                            <p class="warning">{ delete_confirmation_prompt(&i18n) }</p>
                            <input value={(*delete_text).clone()} oninput={on_delete_text} placeholder={delete_word} />
                            <div class="actions">
                                <button class="btn btn-danger" onclick={on_delete} disabled={*delete_busy}>
                                    { busy_label(*delete_busy, i18n.t("common", "confirm")) }
                                </button>
                                <button class="btn btn-ghost" onclick={cancel_delete}>{ i18n.t("common", "cancel") }</button>
                            </div>
                        </div>
                    } else {
                        <button class="btn btn-outline-danger" onclick={reveal_delete}>
                            { i18n.t("settings", "deleteAccount") }
                        </button>
                    }
                </section>
            }
        </div>
    }
}
