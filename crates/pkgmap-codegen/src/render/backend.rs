//! Rendering of call bodies, one backend per calling convention.
//!
//! Backends share the instruction printer and differ only in the function
//! keyword, the connection trait and the execute step.
//!
//! # Examples
//!
//! ```
//! use pkgmap_codegen::render::{AsyncBackend, CallBackend, SyncBackend};
//!
//! assert_eq!(SyncBackend.keyword(), "fn");
//! assert_eq!(AsyncBackend.execute_statement(), "conn.execute(&mut call).await?;");
//! ```

use crate::body::{BindMode, CallBody, Destination, Guard, Instruction, ReturnValue, ValueSource};
use crate::render::context::CallableContext;
use crate::signature::{RoutineSignature, Variant};

/// Indentation of one nesting level inside a body.
const INDENT: &str = "    ";

/// Parameter count (connection included) above which clippy's argument
/// limit is silenced on the generated function.
const MAX_ARGUMENTS: usize = 7;

/// Prints call bodies for one calling convention.
pub trait CallBackend {
    /// Calling convention handled by this backend.
    fn variant(&self) -> Variant;

    /// Function keyword (`fn` or `async fn`).
    fn keyword(&self) -> &'static str;

    /// Trait bound of the connection parameter.
    fn connection_trait(&self) -> &'static str;

    /// Statement executing the call.
    fn execute_statement(&self) -> &'static str;

    /// Prints a body as source lines, relative to the function body.
    fn render_body(&self, body: &CallBody) -> Vec<String> {
        let mut lines = Vec::new();
        for instruction in body.instructions() {
            render_instruction(instruction, self.execute_statement(), &mut lines);
        }
        lines
    }

    /// Builds the template context of a callable.
    fn render_callable(&self, signature: &RoutineSignature, body: &CallBody) -> CallableContext {
        let mut params = vec![format!("conn: &mut impl {}", self.connection_trait())];
        params.extend(
            signature
                .params
                .iter()
                .map(|p| format!("{}: {}", p.name, p.declared_type())),
        );

        let mut attributes = Vec::new();
        if body.is_stub() {
            attributes.push("#[allow(unused_variables)]".to_string());
            if self.variant().is_async() {
                attributes.push("#[allow(clippy::unused_async)]".to_string());
            }
        }
        if params.len() > MAX_ARGUMENTS {
            attributes.push("#[allow(clippy::too_many_arguments)]".to_string());
        }

        CallableContext {
            name: signature.name.clone(),
            keyword: self.keyword().to_string(),
            doc: doc_lines(signature, body),
            attributes,
            params,
            return_type: signature.return_type(),
            body: self.render_body(body),
            routine: signature.id.to_string(),
            overload: signature.overload.clone(),
            variant: self.variant(),
            unsupported: body.is_stub(),
        }
    }
}

/// Backend for blocking callables.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncBackend;

impl CallBackend for SyncBackend {
    fn variant(&self) -> Variant {
        Variant::Sync
    }

    fn keyword(&self) -> &'static str {
        "fn"
    }

    fn connection_trait(&self) -> &'static str {
        "Connection"
    }

    fn execute_statement(&self) -> &'static str {
        "conn.execute(&mut call)?;"
    }
}

/// Backend for asynchronous callables.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsyncBackend;

impl CallBackend for AsyncBackend {
    fn variant(&self) -> Variant {
        Variant::Async
    }

    fn keyword(&self) -> &'static str {
        "async fn"
    }

    fn connection_trait(&self) -> &'static str {
        "AsyncConnection"
    }

    fn execute_statement(&self) -> &'static str {
        "conn.execute(&mut call).await?;"
    }
}

/// Returns the backend for a calling convention.
#[must_use]
pub fn backend_for(variant: Variant) -> &'static dyn CallBackend {
    match variant {
        Variant::Sync => &SyncBackend,
        Variant::Async => &AsyncBackend,
    }
}

fn render_instruction(instruction: &Instruction, execute: &str, lines: &mut Vec<String>) {
    match instruction {
        Instruction::CreateCall { target } => {
            lines.push(format!("let mut call = ProcedureCall::new({target:?});"));
        }
        Instruction::CreateHolder { holder } => {
            lines.push(format!("let mut out = {holder}::default();"));
        }
        Instruction::BindReturn { kind } => {
            lines.push(format!("call.bind_return(BindKind::{kind});"));
        }
        Instruction::Bind {
            name,
            kind,
            length,
            mode,
            source,
            guard,
        } => {
            let size = length.map_or_else(|| "None".to_string(), |l| format!("Some({l})"));
            let statement = match mode {
                BindMode::Input => format!(
                    "call.bind_input({name:?}, BindKind::{kind}, {size}, {});",
                    value_expr(source)
                ),
                BindMode::Output => {
                    format!("call.bind_output({name:?}, BindKind::{kind}, {size});")
                }
                BindMode::InOut => format!(
                    "call.bind_in_out({name:?}, BindKind::{kind}, {size}, {});",
                    value_expr(source)
                ),
            };
            match guard {
                Some(guard) => {
                    lines.push(guard_condition(guard));
                    lines.push(format!("{INDENT}{statement}"));
                    if guard.register_output {
                        lines.push("} else {".to_string());
                        lines.push(format!(
                            "{INDENT}call.bind_output({name:?}, BindKind::{kind}, {size});"
                        ));
                    }
                    lines.push("}".to_string());
                }
                None => lines.push(statement),
            }
        }
        Instruction::Execute => lines.push(execute.to_string()),
        Instruction::Unmarshal {
            name,
            destination,
            conversion,
        } => {
            lines.push(match name {
                Some(name) => format!("let value = call.value({name:?})?;"),
                None => "let value = call.return_value()?;".to_string(),
            });
            lines.push(match destination {
                Destination::OutParam(param) => format!("*{param} = if value.is_null() {{"),
                Destination::HolderField(field) => format!("out.{field} = if value.is_null() {{"),
                Destination::ReturnLocal => {
                    format!("let result: {} = if value.is_null() {{", conversion.ty)
                }
            });
            lines.push(format!("{INDENT}Default::default()"));
            lines.push("} else {".to_string());
            if conversion.wrap_some {
                lines.push(format!("{INDENT}Some({})", conversion.cast));
            } else {
                lines.push(format!("{INDENT}{}", conversion.cast));
            }
            lines.push("};".to_string());
        }
        Instruction::Return(value) => lines.push(
            match value {
                ReturnValue::Unit => "Ok(())",
                ReturnValue::Holder => "Ok(out)",
                ReturnValue::Local => "Ok(result)",
            }
            .to_string(),
        ),
        Instruction::NotImplemented { routine } => {
            lines.push("Err(CallError::NotImplemented {".to_string());
            lines.push(format!("{INDENT}routine: {routine:?}.to_string(),"));
            lines.push("})".to_string());
        }
    }
}

fn value_expr(source: &ValueSource) -> String {
    match source {
        ValueSource::Param(param) => format!("Value::from({param})"),
        ValueSource::RefParam(param) => format!("Value::from({param}.clone())"),
        ValueSource::Null | ValueSource::Absent => "Value::Null".to_string(),
    }
}

fn guard_condition(guard: &Guard) -> String {
    let deref = if guard.by_ref { "*" } else { "" };
    format!("if {deref}{} != <{}>::default() {{", guard.param, guard.ty)
}

fn doc_lines(signature: &RoutineSignature, body: &CallBody) -> Vec<String> {
    let mut doc = vec![match &signature.overload {
        Some(id) => format!(" Calls `{}` (overload {id}).", signature.id),
        None => format!(" Calls `{}`.", signature.id),
    }];

    if body.is_stub() {
        doc.push(String::new());
        doc.push(" The routine takes a record-shaped argument that cannot be bound; every".to_string());
        doc.push(" call returns [`CallError::NotImplemented`].".to_string());
    }

    let defaulted: Vec<String> = signature
        .params
        .iter()
        .filter(|p| p.defaulted)
        .map(|p| format!("`{}`", p.name))
        .collect();
    if !defaulted.is_empty() {
        doc.push(String::new());
        doc.push(format!(
            " Pass `Default::default()` for {} to keep the remote default.",
            defaulted.join(", ")
        ));
    }

    doc.push(String::new());
    doc.push(" # Errors".to_string());
    doc.push(String::new());
    doc.push(" Returns [`CallError`] if the call fails or a returned value has an".to_string());
    doc.push(" unexpected type.".to_string());
    doc
}
