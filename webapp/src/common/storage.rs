use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

use serde::{Serialize, de::DeserializeOwned};

const KEY_PREFIX: &str = "kirki_";

pub fn storage_key(key: &str) -> String {
    format!("{KEY_PREFIX}{key}")
}

pub fn set_local_storage<T>(key: &str, value: T)
where
    T: Serialize,
{
    let key = storage_key(key);

    LocalStorage::set(key.clone(), value)
        .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err}")))
}

pub fn get_local_storage<T>(key: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let key = storage_key(key);

    LocalStorage::get(key.clone()).map_err(|err| {
        tracing::debug!("local storage miss for {key}: {err}");
        anyhow::Error::msg("Local storage failure, see console log")
    })
}

// missing keys are the normal first-visit case, so fall back quietly
pub fn try_local_storage<T>(key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    get_local_storage(key).unwrap_or_default()
}

pub fn delete_local_storage(key: &str) {
    LocalStorage::delete(storage_key(key));
}

// anything that remembers itself between visits
pub trait Stored
where
    Self: Serialize + DeserializeOwned + Default,
{
    const KEY: &'static str;

    fn store(&self) {
        set_local_storage(Self::KEY, self)
    }

    fn fetch() -> Self {
        try_local_storage(Self::KEY)
    }

    fn forget() {
        delete_local_storage(Self::KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_namespaced() {
        assert_eq!(storage_key("preferences"), "kirki_preferences");
    }
}
