//! Constant generation for `#define` values and enumeration members.

use crate::config::GeneratorConfig;
use ffigen_schema::DeclGraph;

/// Generator for managed constants.
pub struct ConstantGenerator<'a> {
    graph: &'a DeclGraph,
    config: &'a GeneratorConfig,
}

impl<'a> ConstantGenerator<'a> {
    /// Creates a new constant generator.
    #[must_use]
    pub fn new(graph: &'a DeclGraph, config: &'a GeneratorConfig) -> Self {
        Self { graph, config }
    }

    /// Generates `#define` constants, then flattened enumeration members.
    ///
    /// A blank line separates the constants from preceding output when any
    /// `#define` constants exist.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();
        let prefix = &self.config.managed_prefix;

        if !self.graph.constants.is_empty() {
            output.push('\n');
        }
        for (name, value) in &self.graph.constants {
            output.push_str(&format!("const {prefix}{name} = {value};\n"));
        }

        for (enum_name, members) in self.graph.enumerations() {
            for member in members {
                output.push_str(&format!(
                    "const {}{}_{} = {};\n",
                    prefix, enum_name, member.name, member.init
                ));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ffigen_schema::{Constants, Declarations, EnumMember, TypeDescriptor, TypeKind, scan_defines};

    fn graph(constants: Constants, enums: &[(&str, &[(&str, &str)])]) -> DeclGraph {
        let types = enums
            .iter()
            .enumerate()
            .map(|(i, (name, members))| {
                TypeDescriptor::new(
                    format!("_e{i}"),
                    TypeKind::Enumeration {
                        name: name.to_string(),
                        members: members
                            .iter()
                            .map(|(member, init)| EnumMember::new(*member, *init))
                            .collect(),
                    },
                )
            })
            .collect();
        let decls = Declarations {
            types,
            ..Declarations::default()
        };
        DeclGraph::build(decls, constants).expect("Failed to build graph")
    }

    #[test]
    fn test_defines_then_enum_members() {
        let g = graph(
            scan_defines("#define A 1\n#define B 2\n#define A 3\n"),
            &[("Color", &[("RED", "0"), ("GREEN", "1")])],
        );
        let config = GeneratorConfig::default();
        let output = ConstantGenerator::new(&g, &config).generate();

        assert_eq!(
            output,
            "\nconst _A = 1;\nconst _B = 2;\nconst _Color_RED = 0;\nconst _Color_GREEN = 1;\n"
        );
    }

    #[test]
    fn test_enum_members_without_defines_have_no_blank_line() {
        let g = graph(Constants::new(), &[("Mode", &[("FAST", "-1")])]);
        let config = GeneratorConfig::default();
        let output = ConstantGenerator::new(&g, &config).generate();

        assert_eq!(output, "const _Mode_FAST = -1;\n");
    }

    #[test]
    fn test_enum_values_kept_verbatim() {
        let g = graph(
            Constants::new(),
            &[("Big", &[("MAX", "4294967295")]), ("Flags", &[("HIGH", "0x80")])],
        );
        let config = GeneratorConfig::default().managed_prefix("k");
        let output = ConstantGenerator::new(&g, &config).generate();

        assert_eq!(output, "const kBig_MAX = 4294967295;\nconst kFlags_HIGH = 0x80;\n");
    }

    #[test]
    fn test_empty_graph_generates_nothing() {
        let g = graph(Constants::new(), &[]);
        let config = GeneratorConfig::default();
        assert!(ConstantGenerator::new(&g, &config).generate().is_empty());
    }
}
