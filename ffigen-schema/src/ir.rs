//! Resolved declaration graph.
//!
//! Descriptors live in an arena; an identifier index maps every type
//! identifier (aliases included) to an arena slot. Typedefs are collapsed
//! once while building, so lookups never see them.

use crate::defines::Constants;
use crate::error::SchemaError;
use crate::types::{Alias, Declarations, EnumMember, FunctionDecl, TypeDescriptor, TypeKind};
use crate::validation::validate_graph;
use std::collections::{HashMap, HashSet};

/// Declaration graph consumed by the generators.
#[derive(Debug, Clone, Default)]
pub struct DeclGraph {
    descriptors: Vec<TypeDescriptor>,
    index: HashMap<String, usize>,
    /// Functions in declaration order.
    pub functions: Vec<FunctionDecl>,
    /// Numeric constants in first-seen order.
    pub constants: Constants,
}

impl DeclGraph {
    /// Builds the graph from parsed declarations and scanned constants.
    ///
    /// # Arguments
    /// * `decls` - Declarations read from the dump
    /// * `constants` - Constants scanned from header text
    ///
    /// # Errors
    /// Returns `SchemaError` on duplicate identifiers, aliases that do not
    /// resolve, or any reference the graph cannot satisfy.
    pub fn build(decls: Declarations, constants: Constants) -> Result<Self, SchemaError> {
        let mut graph = Self {
            descriptors: Vec::with_capacity(decls.types.len()),
            index: HashMap::with_capacity(decls.types.len() + decls.aliases.len()),
            functions: decls.functions,
            constants,
        };

        for descriptor in decls.types {
            graph.insert(descriptor)?;
        }
        graph.collapse_aliases(&decls.aliases)?;
        validate_graph(&graph)?;

        tracing::debug!(
            descriptors = graph.descriptors.len(),
            identifiers = graph.index.len(),
            functions = graph.functions.len(),
            constants = graph.constants.len(),
            "built declaration graph"
        );

        Ok(graph)
    }

    fn insert(&mut self, descriptor: TypeDescriptor) -> Result<(), SchemaError> {
        if self.index.contains_key(&descriptor.id) {
            return Err(SchemaError::DuplicateId { id: descriptor.id });
        }
        self.index.insert(descriptor.id.clone(), self.descriptors.len());
        self.descriptors.push(descriptor);
        Ok(())
    }

    /// Rebinds every alias identifier to the slot of its underlying type.
    fn collapse_aliases(&mut self, aliases: &[Alias]) -> Result<(), SchemaError> {
        let mut targets: HashMap<&str, &str> = HashMap::with_capacity(aliases.len());
        for alias in aliases {
            if self.index.contains_key(&alias.id)
                || targets.insert(&alias.id, &alias.target).is_some()
            {
                return Err(SchemaError::DuplicateId {
                    id: alias.id.clone(),
                });
            }
        }

        for alias in aliases {
            let mut seen = HashSet::new();
            let mut path = vec![alias.id.as_str()];
            let mut current = alias.target.as_str();

            let slot = loop {
                if let Some(&slot) = self.index.get(current) {
                    break slot;
                }
                path.push(current);
                let Some(&next) = targets.get(current) else {
                    return Err(SchemaError::unresolved(
                        current,
                        format!("alias '{}'", alias.id),
                    ));
                };
                if !seen.insert(current) {
                    return Err(SchemaError::CircularReference {
                        path: path.join(" -> "),
                    });
                }
                current = next;
            };

            self.index.insert(alias.id.clone(), slot);
        }

        Ok(())
    }

    /// Looks up a descriptor by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&TypeDescriptor> {
        self.index.get(id).map(|&slot| &self.descriptors[slot])
    }

    /// Returns the kind of a type identifier.
    #[must_use]
    pub fn kind_of(&self, id: &str) -> Option<&TypeKind> {
        self.get(id).map(|descriptor| &descriptor.kind)
    }

    /// Returns true if the identifier resolves.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Iterates over descriptors in declaration order, aliases excluded.
    pub fn descriptors(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.descriptors.iter()
    }

    /// Iterates over enumerations as (name, members) in declaration order.
    pub fn enumerations(&self) -> impl Iterator<Item = (&str, &[EnumMember])> {
        self.descriptors.iter().filter_map(|d| match &d.kind {
            TypeKind::Enumeration { name, members } => Some((name.as_str(), members.as_slice())),
            _ => None,
        })
    }
}
