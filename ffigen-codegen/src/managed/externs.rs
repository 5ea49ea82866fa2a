//! `$SHBuiltin.extern_c` declaration generation.

use crate::config::GeneratorConfig;
use crate::policy::IndirectionPlan;
use crate::resolve::{NO_VALUE, OPAQUE_POINTER, TypeResolver, is_marker};
use ffigen_schema::FunctionDecl;

/// Name of the output slot prepended when a struct is returned by value.
pub const OUTPUT_SLOT: &str = "_out";

/// Generator for extern function bindings.
pub struct ExternGenerator<'a> {
    resolver: TypeResolver<'a>,
    config: &'a GeneratorConfig,
}

impl<'a> ExternGenerator<'a> {
    /// Creates a new extern generator.
    #[must_use]
    pub fn new(resolver: TypeResolver<'a>, config: &'a GeneratorConfig) -> Self {
        Self { resolver, config }
    }

    /// Generates one binding per function, in declaration order.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        for func in &self.resolver.graph().functions {
            output.push_str(&self.generate_extern(func));
        }

        output
    }

    /// Generates the binding for a single function.
    #[must_use]
    pub fn generate_extern(&self, func: &FunctionDecl) -> String {
        let plan = IndirectionPlan::for_function(&self.resolver, func);
        let mut params = Vec::with_capacity(func.params.len() + 1);

        let return_type = if plan.indirect_return {
            params.push(format!("{OUTPUT_SLOT}: {OPAQUE_POINTER}"));
            NO_VALUE
        } else {
            let managed = self.resolver.managed_name(&func.returns);
            self.warn_marker(func, &func.returns, managed);
            managed
        };

        for param in &func.params {
            let managed = self.resolver.managed_name(&param.type_id);
            self.warn_marker(func, &param.type_id, managed);
            // Unnamed parameters are numbered by slot, output slot included.
            let name = match &param.name {
                Some(name) => name.clone(),
                None => format!("_{}", params.len()),
            };
            params.push(format!("{name}: {managed}"));
        }

        let symbol = if plan.requires_wrapper() {
            self.config.wrapper_name(&func.name)
        } else {
            func.name.clone()
        };

        format!(
            "const {}{} = $SHBuiltin.extern_c({}, function {}({}): {} {{ throw 0; }});\n",
            self.config.managed_prefix,
            func.name,
            self.extern_options(),
            symbol,
            params.join(", "),
            return_type
        )
    }

    /// Options object passed to `extern_c`.
    fn extern_options(&self) -> String {
        match &self.config.include {
            Some(header) => format!("{{include: \"{header}\"}}"),
            None => "{}".to_string(),
        }
    }

    fn warn_marker(&self, func: &FunctionDecl, type_id: &str, managed: &str) {
        if is_marker(managed) {
            tracing::warn!(
                function = %func.name,
                type_id,
                marker = managed,
                "type has no managed representation"
            );
        }
    }
}
