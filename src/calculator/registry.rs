use super::calculation::{Calculation, Kind};
use crate::errors::{Error, Result};
use log::{debug, trace};

/// Builds a calculation from its two operands
pub type Constructor = fn(f64, f64) -> Calculation;

/// Something that can turn an operation name and two operands into a rendered
/// calculation result. The REPL session dispatches through this trait.
pub trait Evaluate {
    fn evaluate(&self, operation: &str, a: f64, b: f64) -> Result<String>;
}

/// Maps lowercase operation names to calculation constructors. Names are kept
/// in registration order.
#[derive(Clone, Default)]
pub struct Registry {
    entries: Vec<(String, Constructor)>,
}

impl Registry {
    /// Returns an empty registry
    pub fn new() -> Registry {
        Registry {
            entries: Vec::new(),
        }
    }

    /// Returns a registry offering add, subtract, multiply and divide
    pub fn standard() -> Result<Registry> {
        let mut registry = Registry::new();

        registry.register("add", |a, b| Calculation::new(Kind::Add, a, b))?;
        registry.register("subtract", |a, b| Calculation::new(Kind::Subtract, a, b))?;
        registry.register("multiply", |a, b| Calculation::new(Kind::Multiply, a, b))?;
        registry.register("divide", |a, b| Calculation::new(Kind::Divide, a, b))?;

        Ok(registry)
    }

    /// Registers a constructor under a case-insensitive operation name
    pub fn register(&mut self, name: &str, constructor: Constructor) -> Result<()> {
        let key = name.to_lowercase();
        if self.lookup(&key).is_some() {
            return Err(Error::DuplicateRegistration(name.to_string()));
        }

        debug!("registered calculation type '{}'", key);
        self.entries.push((key, constructor));

        Ok(())
    }

    /// Builds the calculation registered under the given operation name
    pub fn create(&self, name: &str, a: f64, b: f64) -> Result<Calculation> {
        let Some(constructor) = self.lookup(&name.to_lowercase()) else {
            return Err(Error::UnsupportedOperation {
                name: name.to_string(),
                available: self.names(),
            });
        };

        let calculation = constructor(a, b);
        trace!("created {}", calculation.describe());

        Ok(calculation)
    }

    /// Returns the registered operation names in registration order
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|(name, _)| name.clone()).collect()
    }

    /// Returns the number of registered operations
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no operations are registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn lookup(&self, key: &str) -> Option<Constructor> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, constructor)| *constructor)
    }
}

impl Evaluate for Registry {
    fn evaluate(&self, operation: &str, a: f64, b: f64) -> Result<String> {
        self.create(operation, a, b)?.render()
    }
}
