//! Declaration graph validation.
//!
//! Every identifier the generators may follow has to resolve, and pointer
//! or array chains have to bottom out in a non-derived type.

use crate::error::SchemaError;
use crate::ir::DeclGraph;
use std::collections::HashSet;

/// Validates a declaration graph.
///
/// # Arguments
/// * `graph` - Graph with aliases already collapsed
///
/// # Errors
/// Returns `SchemaError` for the first unresolved reference or cyclic
/// pointer/array chain found.
pub fn validate_graph(graph: &DeclGraph) -> Result<(), SchemaError> {
    validate_functions(graph)?;
    validate_derived_types(graph)?;
    Ok(())
}

/// Validates function return and parameter types.
fn validate_functions(graph: &DeclGraph) -> Result<(), SchemaError> {
    for func in &graph.functions {
        if !graph.contains(&func.returns) {
            return Err(SchemaError::unresolved(
                &func.returns,
                format!("return type of '{}'", func.name),
            ));
        }

        for (position, param) in func.params.iter().enumerate() {
            if !graph.contains(&param.type_id) {
                return Err(SchemaError::unresolved(
                    &param.type_id,
                    format!("parameter {} of '{}'", position, func.name),
                ));
            }
        }
    }
    Ok(())
}

/// Validates pointee/element references and rejects cyclic chains.
fn validate_derived_types(graph: &DeclGraph) -> Result<(), SchemaError> {
    for descriptor in graph.descriptors() {
        let Some(referenced) = descriptor.kind.referenced() else {
            continue;
        };
        if !graph.contains(referenced) {
            return Err(SchemaError::unresolved(
                referenced,
                format!("{} '{}'", descriptor.kind.label(), descriptor.id),
            ));
        }

        let mut seen = HashSet::new();
        let mut path = vec![descriptor.id.as_str()];
        let mut current = descriptor;
        seen.insert(current.id.as_str());

        while let Some(next_id) = current.kind.referenced() {
            let Some(next) = graph.get(next_id) else {
                break;
            };
            path.push(next.id.as_str());
            if !seen.insert(next.id.as_str()) {
                return Err(SchemaError::CircularReference {
                    path: path.join(" -> "),
                });
            }
            current = next;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::defines::Constants;
    use crate::error::SchemaError;
    use crate::ir::DeclGraph;
    use crate::types::{Declarations, FunctionDecl, Param, TypeDescriptor, TypeKind};

    fn int_type() -> TypeDescriptor {
        TypeDescriptor::new(
            "_int",
            TypeKind::Fundamental {
                name: "int".to_string(),
            },
        )
    }

    fn pointer(id: &str, pointee: &str) -> TypeDescriptor {
        TypeDescriptor::new(
            id,
            TypeKind::Pointer {
                pointee: pointee.to_string(),
            },
        )
    }

    #[test]
    fn test_unresolved_return_type() {
        let decls = Declarations {
            types: vec![int_type()],
            aliases: Vec::new(),
            functions: vec![FunctionDecl::new("f", "_nope")],
        };

        let err = DeclGraph::build(decls, Constants::new()).expect_err("should fail");
        assert!(err.to_string().contains("return type of 'f'"));
    }

    #[test]
    fn test_unresolved_parameter_type() {
        let mut func = FunctionDecl::new("f", "_int");
        func.add_param(Param::new(None, "_nope"));
        let decls = Declarations {
            types: vec![int_type()],
            aliases: Vec::new(),
            functions: vec![func],
        };

        let result = DeclGraph::build(decls, Constants::new());
        assert!(matches!(result, Err(SchemaError::UnresolvedType { ref id, .. }) if id == "_nope"));
    }

    #[test]
    fn test_unresolved_pointee() {
        let decls = Declarations {
            types: vec![int_type(), pointer("_p", "_gone")],
            aliases: Vec::new(),
            functions: Vec::new(),
        };

        let result = DeclGraph::build(decls, Constants::new());
        assert!(matches!(result, Err(SchemaError::UnresolvedType { ref id, .. }) if id == "_gone"));
    }

    #[test]
    fn test_pointer_cycle_rejected() {
        let decls = Declarations {
            types: vec![pointer("_a", "_b"), pointer("_b", "_a")],
            aliases: Vec::new(),
            functions: Vec::new(),
        };

        let result = DeclGraph::build(decls, Constants::new());
        assert!(matches!(result, Err(SchemaError::CircularReference { .. })));
    }
}
