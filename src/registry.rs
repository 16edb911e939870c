use crate::arithmetic::Operation;
use crate::config::VectorOpsConfig;
use crate::engine::{ErrorReporter, FunctionOutput, VectorOperations};
use crate::{Result, VectorOpsError};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// A callable the host can dispatch to by name.
pub type ScalarFunction = Arc<dyn Fn(&[&[u8]], &dyn ErrorReporter) -> FunctionOutput + Send + Sync>;

/// The host's table of callable function names.
pub trait FunctionCatalog {
    fn register(&mut self, name: &str, function: ScalarFunction) -> Result<()>;
    /// `Ok(true)` if `name` was removed, `Ok(false)` if it was not
    /// registered, an error if it is still in use.
    fn unregister(&mut self, name: &str) -> Result<bool>;
}

/// Catalog kept in memory. Names are case-insensitive.
pub struct InMemoryCatalog {
    functions: HashMap<String, ScalarFunction>,
    in_use: HashSet<String>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
            in_use: HashSet::new(),
        }
    }

    fn key(name: &str) -> String {
        name.to_ascii_uppercase()
    }

    pub fn lookup(&self, name: &str) -> Option<ScalarFunction> {
        self.functions.get(&Self::key(name)).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(&Self::key(name))
    }

    pub fn count(&self) -> usize {
        self.functions.len()
    }

    /// Pin `name` so that unregistering it fails until [`release`](Self::release).
    pub fn mark_in_use(&mut self, name: &str) {
        self.in_use.insert(Self::key(name));
    }

    pub fn release(&mut self, name: &str) {
        self.in_use.remove(&Self::key(name));
    }
}

impl FunctionCatalog for InMemoryCatalog {
    fn register(&mut self, name: &str, function: ScalarFunction) -> Result<()> {
        let key = Self::key(name);
        if self.functions.contains_key(&key) {
            return Err(VectorOpsError::RegistrationError(format!(
                "function '{}' already exists",
                name
            )));
        }
        self.functions.insert(key, function);
        Ok(())
    }

    fn unregister(&mut self, name: &str) -> Result<bool> {
        let key = Self::key(name);
        if self.in_use.contains(&key) {
            return Err(VectorOpsError::RegistrationError(format!(
                "function '{}' is in use",
                name
            )));
        }
        Ok(self.functions.remove(&key).is_some())
    }
}

impl<T: FunctionCatalog + ?Sized> FunctionCatalog for &mut T {
    fn register(&mut self, name: &str, function: ScalarFunction) -> Result<()> {
        (**self).register(name, function)
    }

    fn unregister(&mut self, name: &str) -> Result<bool> {
        (**self).unregister(name)
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Names this component has registered, in registration order.
#[derive(Debug, Default)]
pub struct FunctionRegistry {
    names: Vec<String>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self { names: Vec::new() }
    }

    pub fn add_scalar(
        &mut self,
        catalog: &mut dyn FunctionCatalog,
        name: &str,
        function: ScalarFunction,
    ) -> Result<()> {
        catalog.register(name, function)?;
        self.names.push(name.to_string());
        Ok(())
    }

    /// Try to unregister every name. Names that were removed, or were no
    /// longer present, are forgotten; the rest stay for a later attempt.
    /// Returns `true` once nothing is left.
    pub fn unregister(&mut self, catalog: &mut dyn FunctionCatalog) -> bool {
        self.names.retain(|name| match catalog.unregister(name) {
            Ok(_) => false,
            Err(err) => {
                tracing::warn!(name = %name, error = %err, "could not unregister function");
                true
            }
        });
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

fn scalar_function(op: Operation, operations: Arc<VectorOperations>) -> ScalarFunction {
    Arc::new(move |args: &[&[u8]], reporter: &dyn ErrorReporter| {
        operations.invoke(op, args, reporter)
    })
}

/// Owns the registration of the vector functions with a catalog, from
/// [`init`](Self::init) until [`deinit`](Self::deinit) or drop.
pub struct VectorOperationsComponent<C: FunctionCatalog> {
    catalog: C,
    registry: FunctionRegistry,
    operations: Arc<VectorOperations>,
}

impl<C: FunctionCatalog> VectorOperationsComponent<C> {
    pub fn init(mut catalog: C, config: VectorOpsConfig) -> Result<Self> {
        tracing::info!("initializing");

        let operations = Arc::new(VectorOperations::new(config)?);
        let mut registry = FunctionRegistry::new();

        for op in Operation::ALL {
            let function = scalar_function(op, Arc::clone(&operations));
            if let Err(err) = registry.add_scalar(&mut catalog, op.function_name(), function) {
                tracing::error!(name = op.function_name(), error = %err, "registration failed");
                registry.unregister(&mut catalog);
                return Err(err);
            }
        }

        Ok(Self {
            catalog,
            registry,
            operations,
        })
    }

    /// Unregister all functions. Fails while any of them is still in use;
    /// the component stays registered and can be deinitialized again later.
    pub fn deinit(&mut self) -> Result<()> {
        if !self.registry.unregister(&mut self.catalog) {
            return Err(VectorOpsError::RegistrationError(format!(
                "functions still in use: {}",
                self.registry.names().join(", ")
            )));
        }
        tracing::info!("uninstalled");
        Ok(())
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut C {
        &mut self.catalog
    }

    pub fn registry(&self) -> &FunctionRegistry {
        &self.registry
    }

    pub fn operations(&self) -> &VectorOperations {
        &self.operations
    }
}

impl<C: FunctionCatalog> Drop for VectorOperationsComponent<C> {
    fn drop(&mut self) {
        if !self.registry.is_empty() {
            self.registry.unregister(&mut self.catalog);
        }
    }
}
