use std::rc::Rc;

use yew::prelude::*;

use crate::config::AppConfig;
use crate::document::{DocumentEffects, DomDocument};
use crate::storage::{BrowserStorage, PreferenceStore};

/// Long-lived collaborators, built once in `main` and handed to the
/// providers.
#[derive(Clone)]
pub struct Services {
    pub config: Rc<AppConfig>,
    pub storage: Rc<dyn PreferenceStore>,
    pub document: Rc<dyn DocumentEffects>,
}

impl Services {
    pub fn browser(config: AppConfig) -> Self {
        Self {
            config: Rc::new(config),
            storage: Rc::new(BrowserStorage),
            document: Rc::new(DomDocument),
        }
    }
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.config, &other.config)
            && Rc::ptr_eq(&self.storage, &other.storage)
            && Rc::ptr_eq(&self.document, &other.document)
    }
}

#[hook]
pub fn use_services() -> Services {
    use_context::<Services>().expect("use_services must be used within the App providers")
}
