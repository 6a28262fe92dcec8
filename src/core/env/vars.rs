use super::{identity, EnvError};
use std::collections::BTreeMap;

pub const PROMPT: &str = "PROMPT";
pub const USER: &str = "USER";
pub const HOME: &str = "HOME";

// The key set is fixed once built; set_if_exists never inserts.
#[derive(Clone, Debug)]
pub struct EnvStore {
    vars: BTreeMap<Box<str>, Box<str>>,
}

impl EnvStore {
    pub fn new(user: &str, prompt: &str) -> Self {
        let mut vars = BTreeMap::new();
        vars.insert(USER.into(), user.into());
        vars.insert(PROMPT.into(), prompt.into());
        Self { vars }
    }

    pub fn from_process(prompt: &str) -> Self {
        let store = Self::new(&identity::current_user(), prompt);
        match dirs::home_dir() {
            Some(home) => store.with_var(HOME, &home.to_string_lossy()),
            None => store,
        }
    }

    pub fn with_var(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Result<&str, EnvError> {
        self.vars
            .get(name)
            .map(|s| s.as_ref())
            .ok_or_else(|| EnvError::VarNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn set_if_exists(&mut self, name: &str, value: &str) -> Result<(), EnvError> {
        match self.vars.get_mut(name) {
            Some(slot) => {
                *slot = value.into();
                Ok(())
            }
            None => Err(EnvError::UnknownVariable(name.to_string())),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_ref(), v.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_store() -> EnvStore {
        EnvStore::new("alice", "~$/tmp >>>>> ")
    }

    #[test]
    fn test_seeded_keys() -> Result<(), EnvError> {
        let store = setup_store();
        assert_eq!(store.get(USER)?, "alice");
        assert_eq!(store.get(PROMPT)?, "~$/tmp >>>>> ");
        assert_eq!(store.iter().count(), 2);
        Ok(())
    }

    #[test]
    fn test_set_existing() -> Result<(), EnvError> {
        let mut store = setup_store();
        store.set_if_exists(USER, "bob")?;
        assert_eq!(store.get(USER)?, "bob");
        Ok(())
    }

    #[test]
    fn test_set_unknown_never_inserts() {
        let mut store = setup_store();
        let result = store.set_if_exists("EDITOR", "vi");

        assert_eq!(result, Err(EnvError::UnknownVariable("EDITOR".to_string())));
        assert!(!store.contains("EDITOR"));
        assert_eq!(store.iter().count(), 2);
    }

    #[test]
    fn test_get_missing() {
        let store = setup_store();
        assert!(matches!(store.get("NOPE"), Err(EnvError::VarNotFound(_))));
    }

    #[test]
    fn test_iter_sorted() {
        let store = setup_store().with_var(HOME, "/home/alice");
        let keys: Vec<&str> = store.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![HOME, PROMPT, USER]);
    }
}
