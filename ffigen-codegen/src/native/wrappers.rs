//! By-pointer C wrapper generation.
//!
//! Each wrapper takes pointers where the wrapped function takes structs or
//! unions by value, and writes a by-value struct result through an output
//! pointer. Wrapper parameters are numbered `a0, a1, ...` across the whole
//! list, output slot first, so they line up with the managed binding's
//! slots.

use crate::config::GeneratorConfig;
use crate::policy::IndirectionPlan;
use crate::resolve::{TypeResolver, is_marker};
use ffigen_schema::FunctionDecl;

const VOID: &str = "void";

/// Generator for C wrapper definitions.
pub struct WrapperGenerator<'a> {
    resolver: TypeResolver<'a>,
    config: &'a GeneratorConfig,
}

impl<'a> WrapperGenerator<'a> {
    /// Creates a new wrapper generator.
    #[must_use]
    pub fn new(resolver: TypeResolver<'a>, config: &'a GeneratorConfig) -> Self {
        Self { resolver, config }
    }

    /// Generates wrappers for every function that needs one, in
    /// declaration order.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        if let Some(header) = &self.config.include {
            output.push_str(&format!("#include \"{header}\"\n\n"));
        }

        for func in &self.resolver.graph().functions {
            if let Some(wrapper) = self.generate_wrapper(func) {
                output.push_str(&wrapper);
            }
        }

        output
    }

    /// Generates the wrapper for a function, or `None` if the function can
    /// be bound directly.
    #[must_use]
    pub fn generate_wrapper(&self, func: &FunctionDecl) -> Option<String> {
        let plan = IndirectionPlan::for_function(&self.resolver, func);
        if !plan.requires_wrapper() {
            return None;
        }

        let mut params = Vec::with_capacity(func.params.len() + 1);
        let mut args = Vec::with_capacity(func.params.len());

        let native_return = self.resolver.native_name(&func.returns);
        self.warn_marker(func, &func.returns, &native_return);

        let (return_type, call_prefix) = if plan.indirect_return {
            params.push(format!("{native_return}* a0"));
            (VOID.to_string(), "*a0 = ")
        } else {
            let prefix = if native_return == VOID { "" } else { "return " };
            (native_return, prefix)
        };

        for (param, &indirect) in func.params.iter().zip(&plan.indirect_params) {
            let slot = params.len();
            let native = self.resolver.native_name(&param.type_id);
            self.warn_marker(func, &param.type_id, &native);

            if indirect {
                params.push(format!("{native}* a{slot}"));
                args.push(format!("*a{slot}"));
            } else {
                params.push(format!("{native} a{slot}"));
                args.push(format!("a{slot}"));
            }
        }

        Some(format!(
            "{} {}({}) {{\n  {}{}({});\n}}\n",
            return_type,
            self.config.wrapper_name(&func.name),
            params.join(", "),
            call_prefix,
            func.name,
            args.join(", ")
        ))
    }

    fn warn_marker(&self, func: &FunctionDecl, type_id: &str, native: &str) {
        if is_marker(native) {
            tracing::warn!(
                function = %func.name,
                type_id,
                marker = native,
                "type has no C spelling"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::tests::sample_graph;
    use ffigen_schema::{Constants, DeclGraph, Declarations, Param, TypeDescriptor, TypeKind};

    fn wrapper_for(func: &FunctionDecl) -> Option<String> {
        let graph = sample_graph();
        let config = GeneratorConfig::default();
        WrapperGenerator::new(TypeResolver::new(&graph), &config).generate_wrapper(func)
    }

    #[test]
    fn test_struct_return_and_parameters() {
        let mut add = FunctionDecl::new("add", "_point_t");
        add.add_param(Param::new(Some("a".to_string()), "_point_t"));
        add.add_param(Param::new(Some("b".to_string()), "_point"));

        let wrapper = wrapper_for(&add).expect("add needs a wrapper");
        assert_eq!(
            wrapper,
            "void add_cwrap(Point* a0, Point* a1, Point* a2) {\n  *a0 = add(*a1, *a2);\n}\n"
        );
    }

    #[test]
    fn test_unclassified_return_type_is_marked() {
        let mut project = FunctionDecl::new("project", "_fn");
        project.add_param(Param::new(Some("p".to_string()), "_point"));

        let wrapper = wrapper_for(&project).expect("project needs a wrapper");
        assert_eq!(
            wrapper,
            "UNKNOWN_TYPE project_cwrap(Point* a0) {\n  return project(*a0);\n}\n"
        );
    }

    #[test]
    fn test_no_wrapper_without_aggregates() {
        let mut square = FunctionDecl::new("square", "_int");
        square.add_param(Param::new(Some("x".to_string()), "_int"));

        assert!(wrapper_for(&square).is_none());
    }

    #[test]
    fn test_mixed_parameters_return_directly() {
        let mut length = FunctionDecl::new("length", "_int");
        length.add_param(Param::new(None, "_ppchar"));
        length.add_param(Param::new(Some("v".to_string()), "_value_t"));
        length.add_param(Param::new(None, "_color"));

        let wrapper = wrapper_for(&length).expect("length needs a wrapper");
        assert_eq!(
            wrapper,
            "int length_cwrap(char** a0, Value* a1, Color a2) {\n  return length(a0, *a1, a2);\n}\n"
        );
    }

    #[test]
    fn test_void_return_is_a_plain_call() {
        let mut draw = FunctionDecl::new("draw", "_void");
        draw.add_param(Param::new(None, "_point"));
        let decls = Declarations {
            types: vec![
                TypeDescriptor::new(
                    "_void",
                    TypeKind::Fundamental {
                        name: "void".to_string(),
                    },
                ),
                TypeDescriptor::new(
                    "_point",
                    TypeKind::Struct {
                        name: "Point".to_string(),
                    },
                ),
            ],
            aliases: Vec::new(),
            functions: vec![draw],
        };
        let graph = DeclGraph::build(decls, Constants::new()).expect("Failed to build graph");
        let config = GeneratorConfig::default();

        let output = WrapperGenerator::new(TypeResolver::new(&graph), &config).generate();
        assert_eq!(output, "void draw_cwrap(Point* a0) {\n  draw(*a0);\n}\n");
    }

    #[test]
    fn test_array_parameter_decays() {
        let mut sum = FunctionDecl::new("sum", "_value");
        sum.add_param(Param::new(Some("xs".to_string()), "_arr"));

        let wrapper = wrapper_for(&sum).expect("sum needs a wrapper");
        assert_eq!(
            wrapper,
            "void sum_cwrap(Value* a0, int* a1) {\n  *a0 = sum(a1);\n}\n"
        );
    }

    #[test]
    fn test_include_header_precedes_wrappers() {
        let graph = sample_graph();
        let config = GeneratorConfig::new().include("shapes.h");

        let output = WrapperGenerator::new(TypeResolver::new(&graph), &config).generate();
        assert_eq!(output, "#include \"shapes.h\"\n\n");
    }
}
