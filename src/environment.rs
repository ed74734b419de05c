use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{LayoutError, Result};
use crate::style::LayoutDefaults;

#[derive(Clone, Default)]
pub struct Environment {
    values: HashMap<TypeId, Rc<dyn Any>>
}

impl Environment {
    pub fn new() -> Environment {
        Environment::default()
    }

    pub fn standard() -> Environment {
        Environment::new().with(LayoutDefaults::default())
    }

    pub fn with<T: 'static>(&self, value: T) -> Environment {
        let mut scoped = self.clone();
        scoped.insert(value);
        scoped
    }

    pub fn insert<T: 'static>(&mut self, value: T) {
        self.values.insert(TypeId::of::<T>(), Rc::new(value));
    }

    pub fn try_get<T: 'static>(&self) -> Option<&T> {
        self.values.get(&TypeId::of::<T>())
            .and_then(|value| value.downcast_ref::<T>())
    }

    /// Looks up a bound value. A missing binding is an error, never a default.
    pub fn get<T: 'static>(&self) -> Result<&T> {
        self.try_get::<T>().ok_or_else(|| {
            let type_name = type_name::<T>();
            log::error!("missing environment binding for `{type_name}`");
            LayoutError::MissingBinding { type_name }
        })
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.values.contains_key(&TypeId::of::<T>())
    }
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
            .field("bindings", &self.values.len())
            .finish()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Accent(u32);

    #[test]
    fn missing_binding_names_the_type() {
        let env = Environment::new();
        let err = env.get::<Accent>().unwrap_err();
        assert_eq!(err, LayoutError::MissingBinding { type_name: type_name::<Accent>() });
        assert!(err.to_string().contains("Accent"));
    }

    #[test]
    fn scoped_values_do_not_leak_to_parent() {
        let parent = Environment::new().with(Accent(1));
        let child = parent.with(Accent(2));

        assert_eq!(parent.get::<Accent>(), Ok(&Accent(1)));
        assert_eq!(child.get::<Accent>(), Ok(&Accent(2)));
    }

    #[test]
    fn standard_binds_layout_defaults() {
        let env = Environment::standard();
        assert!(env.contains::<LayoutDefaults>());
        assert_eq!(env.get::<LayoutDefaults>().map(|d| d.spacing), Ok(8.0));
    }
}
