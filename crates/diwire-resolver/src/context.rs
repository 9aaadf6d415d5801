//! Resolution context (indices and working state during resolution).
//!
//! One value owned by the pipeline driver and moved through every pass in
//! fixed order. Each pass appends to the state of its predecessors and never
//! rewrites it.

use crate::annotations::normalize;
use crate::registry::TokenRegistry;
use diwire_domain::ports::SemanticOracle;
use diwire_domain::value_objects::{
    Annotations, Binding, Declaration, DeclarationKind, Diagnostic, Factory, FactoryPlan, ModulePlan, Plan,
    PlannedToken, ResolverConfig, TokenId, TypeId, TypeMetadata,
};
use indexmap::IndexMap;

/// A declaration paired with its normalised annotations
#[derive(Debug, Clone)]
pub struct NormalizedDeclaration<'a> {
    /// The declaration as reported by the oracle
    pub declaration: &'a Declaration,
    /// Structured annotations
    pub annotations: Annotations,
}

/// Resolution context holding indices and state during resolution.
pub struct ResolutionContext<'a> {
    /// Source of all semantic information
    pub(crate) oracle: &'a dyn SemanticOracle,
    /// Resolution settings
    pub(crate) config: &'a ResolverConfig,
    /// Declarations with normalised annotations, in discovery order
    pub(crate) declarations: Vec<NormalizedDeclaration<'a>>,
    /// Qualified type name -> type walked for its metadata
    pub(crate) declared_types: IndexMap<String, TypeId>,
    /// Token table (passes 1-4)
    pub(crate) registry: TokenRegistry,
    /// Auto-detected token -> base relationship (pass 2)
    pub(crate) derivations: IndexMap<TokenId, TypeMetadata>,
    /// Factory records (pass 3)
    pub(crate) factories: Vec<Factory>,
    /// Produced type of each factory, parallel to `factories` (pass 3)
    pub(crate) factory_types: Vec<TypeId>,
    /// Token -> reflective metadata (pass 4)
    pub(crate) token_metadata: IndexMap<TokenId, TypeMetadata>,
    /// Emission order (pass 5)
    pub(crate) order: Vec<TokenId>,
    /// Binding target of each factory, parallel to `factories` (pass 6)
    pub(crate) targets: Vec<TokenId>,
    /// Module -> bindings (pass 6)
    pub(crate) modules: IndexMap<String, Vec<Binding>>,
    /// Diagnostics not yet drained by the driver
    pub(crate) pending: Vec<Diagnostic>,
}

impl<'a> ResolutionContext<'a> {
    /// Create a context, normalising every declaration's annotations up front
    pub fn new(oracle: &'a dyn SemanticOracle, config: &'a ResolverConfig) -> Self {
        let declarations: Vec<_> = oracle
            .declarations()
            .iter()
            .map(|declaration| NormalizedDeclaration {
                declaration,
                annotations: normalize(declaration, &config.annotations),
            })
            .collect();

        let mut declared_types = IndexMap::new();
        for decl in oracle.declarations() {
            if decl.kind.is_type_like() || decl.kind == DeclarationKind::Class {
                declared_types
                    .entry(decl.qualified_name())
                    .or_insert_with(|| decl.subject_type());
            }
        }

        Self {
            oracle,
            config,
            declarations,
            declared_types,
            registry: TokenRegistry::new(config.token_suffix.clone()),
            derivations: IndexMap::new(),
            factories: Vec::new(),
            factory_types: Vec::new(),
            token_metadata: IndexMap::new(),
            order: Vec::new(),
            targets: Vec::new(),
            modules: IndexMap::new(),
            pending: Vec::new(),
        }
    }

    /// Declarations with normalised annotations
    pub fn declarations(&self) -> &[NormalizedDeclaration<'a>] {
        &self.declarations
    }

    /// Token table
    pub fn registry(&self) -> &TokenRegistry {
        &self.registry
    }

    /// Factory records
    pub fn factories(&self) -> &[Factory] {
        &self.factories
    }

    /// Reflective metadata of a token
    pub fn metadata(&self, id: &TokenId) -> Option<&TypeMetadata> {
        self.token_metadata.get(id)
    }

    /// Emission order, empty before the ordering pass
    pub fn order(&self) -> &[TokenId] {
        &self.order
    }

    /// Bindings of a module, empty before the planning pass
    pub fn bindings(&self, module: &str) -> &[Binding] {
        self.modules.get(module).map(Vec::as_slice).unwrap_or_default()
    }

    /// Diagnostics recorded since the last drain
    pub fn pending_diagnostics(&self) -> &[Diagnostic] {
        &self.pending
    }

    /// Move out diagnostics recorded since the last drain
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.pending)
    }

    /// Assemble the artifact from a context that has been through every pass
    pub fn into_plan(self, diagnostics: Vec<Diagnostic>) -> Plan {
        let Self {
            registry,
            mut token_metadata,
            factories,
            targets,
            modules,
            order,
            ..
        } = self;

        let tokens = order
            .iter()
            .filter_map(|id| registry.entry(id))
            .map(|entry| PlannedToken {
                token: entry.token.clone(),
                origin: entry.origin,
                metadata: token_metadata.shift_remove(&entry.token.id).unwrap_or_default(),
            })
            .collect();

        let imports = order
            .iter()
            .filter_map(|id| registry.imports().get(id).map(|file| (id.clone(), file.clone())))
            .collect();

        let factories = factories
            .into_iter()
            .zip(targets)
            .map(|(factory, target)| FactoryPlan { factory, target })
            .collect();

        let modules = modules
            .into_iter()
            .map(|(name, bindings)| ModulePlan { name, bindings })
            .collect();

        Plan {
            tokens,
            factories,
            modules,
            imports,
            diagnostics,
        }
    }
}
