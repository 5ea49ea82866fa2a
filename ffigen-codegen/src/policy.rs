//! Indirection policy.
//!
//! Structs and unions never cross the managed boundary by value. A function
//! that takes or returns one is bound through a wrapper that moves the value
//! through a pointer instead. Both generators derive that decision from
//! [`IndirectionPlan`] so they always agree on which functions get wrapped.

use crate::resolve::TypeResolver;
use ffigen_schema::FunctionDecl;

/// Returns true if values of this type must be passed by pointer.
#[must_use]
pub fn needs_indirection(resolver: &TypeResolver<'_>, id: &str) -> bool {
    resolver.kind_of(id).is_some_and(|kind| kind.is_aggregate())
}

/// Per-function indirection decisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndirectionPlan {
    /// Whether the return value goes through an output pointer.
    pub indirect_return: bool,
    /// Whether each parameter, in order, is passed by pointer.
    pub indirect_params: Vec<bool>,
}

impl IndirectionPlan {
    /// Computes the plan for a function.
    #[must_use]
    pub fn for_function(resolver: &TypeResolver<'_>, func: &FunctionDecl) -> Self {
        Self {
            indirect_return: needs_indirection(resolver, &func.returns),
            indirect_params: func
                .params
                .iter()
                .map(|param| needs_indirection(resolver, &param.type_id))
                .collect(),
        }
    }

    /// Returns true if the function must be bound through a wrapper.
    #[must_use]
    pub fn requires_wrapper(&self) -> bool {
        self.indirect_return || self.indirect_params.iter().any(|&indirect| indirect)
    }
}

/// Returns true if the function must be bound through a wrapper.
#[must_use]
pub fn requires_native_wrapper(resolver: &TypeResolver<'_>, func: &FunctionDecl) -> bool {
    IndirectionPlan::for_function(resolver, func).requires_wrapper()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::tests::sample_graph;
    use ffigen_schema::Param;

    fn func(returns: &str, params: &[&str]) -> FunctionDecl {
        let mut func = FunctionDecl::new("f", returns);
        for type_id in params {
            func.add_param(Param::new(None, *type_id));
        }
        func
    }

    #[test]
    fn test_only_structs_and_unions_need_indirection() {
        let graph = sample_graph();
        let resolver = TypeResolver::new(&graph);

        for id in ["_point", "_value", "_point_t", "_value_t"] {
            assert!(needs_indirection(&resolver, id), "{id}");
        }
        for id in [
            "_int", "_ld", "_char", "_cchar", "_color", "_pchar", "_ppoint", "_arr", "_fn",
            "_missing",
        ] {
            assert!(!needs_indirection(&resolver, id), "{id}");
        }
    }

    #[test]
    fn test_plan_for_struct_return() {
        let graph = sample_graph();
        let resolver = TypeResolver::new(&graph);

        let plan = IndirectionPlan::for_function(&resolver, &func("_point_t", &["_int"]));
        assert!(plan.indirect_return);
        assert_eq!(plan.indirect_params, [false]);
        assert!(plan.requires_wrapper());
    }

    #[test]
    fn test_plan_for_union_parameter() {
        let graph = sample_graph();
        let resolver = TypeResolver::new(&graph);

        let f = func("_int", &["_int", "_value"]);
        let plan = IndirectionPlan::for_function(&resolver, &f);
        assert!(!plan.indirect_return);
        assert_eq!(plan.indirect_params, [false, true]);
        assert!(requires_native_wrapper(&resolver, &f));
    }

    #[test]
    fn test_pointer_to_struct_needs_no_wrapper() {
        let graph = sample_graph();
        let resolver = TypeResolver::new(&graph);

        assert!(!requires_native_wrapper(
            &resolver,
            &func("_ppoint", &["_ppoint", "_color"])
        ));
        assert!(!requires_native_wrapper(&resolver, &func("_int", &[])));
    }
}
