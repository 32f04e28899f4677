//! Call body intermediate representation.
//!
//! The body emitter turns a signature into a flat instruction list. Backends
//! in [`crate::render`] print it; nothing here knows about Rust syntax beyond
//! the type names carried through from the type mapper.

use crate::common::naming::{self, RETURN_FIELD};
use crate::signature::{ParamMode, ReturnShape, RoutineSignature, TypedArgument};
use crate::type_map::TypeMapper;
use pkgmap_core::{Direction, Result};
use pkgmap_runtime::BindKind;

/// How a bound argument moves data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindMode {
    /// Value sent only
    Input,
    /// Value received only
    Output,
    /// Value sent and received
    InOut,
}

/// Where the bound value comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSource {
    /// A by-value parameter, moved into the bind
    Param(String),
    /// A `&mut` parameter, cloned into the bind
    RefParam(String),
    /// Remote NULL
    Null,
    /// No value is supplied
    Absent,
}

/// Guard issuing a bind only when the caller passed a non-default value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guard {
    /// Parameter compared against its default
    pub param: String,
    /// Parameter type
    pub ty: String,
    /// Parameter is a `&mut` reference
    pub by_ref: bool,
    /// Register the slot output-only when the value is skipped, so it can
    /// still be read back after the call
    pub register_output: bool,
}

/// Destination of an unmarshalled value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// A `&mut` parameter
    OutParam(String),
    /// A field of the output holder
    HolderField(String),
    /// The local returned from the callable
    ReturnLocal,
}

/// Conversion from a returned value to its local type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Local type of the destination
    pub ty: String,
    /// Cast expression applied to `value`
    pub cast: String,
    /// Wrap the cast result in `Some`
    pub wrap_some: bool,
}

/// What the callable finally returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnValue {
    /// `()`
    Unit,
    /// The output holder
    Holder,
    /// The return local
    Local,
}

/// One step of a call body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// Create the call addressed to `OWNER.PACKAGE.ROUTINE`
    CreateCall {
        /// Fully qualified routine identifier
        target: String,
    },
    /// Create the output holder
    CreateHolder {
        /// Holder type name
        holder: String,
    },
    /// Bind the function result
    BindReturn {
        /// Wire type
        kind: BindKind,
    },
    /// Bind a named argument
    Bind {
        /// Remote argument name
        name: String,
        /// Wire type
        kind: BindKind,
        /// Declared length
        length: Option<u32>,
        /// Direction
        mode: BindMode,
        /// Value supplied at bind time
        source: ValueSource,
        /// Defaulting guard
        guard: Option<Guard>,
    },
    /// Execute the call
    Execute,
    /// Read a returned value
    Unmarshal {
        /// Remote argument name, `None` for the function result
        name: Option<String>,
        /// Where the value goes
        destination: Destination,
        /// How it is converted
        conversion: Conversion,
    },
    /// Return from the callable
    Return(ReturnValue),
    /// Fail with a not-implemented error
    NotImplemented {
        /// Fully qualified routine identifier
        routine: String,
    },
}

/// Instruction list of one callable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallBody {
    instructions: Vec<Instruction>,
}

impl CallBody {
    /// Returns the instructions in execution order.
    #[must_use]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Returns `true` if the body is the not-implemented stub.
    #[must_use]
    pub fn is_stub(&self) -> bool {
        matches!(self.instructions.as_slice(), [Instruction::NotImplemented { .. }])
    }

    pub(crate) fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }
}

/// Builds call bodies from signatures.
#[derive(Debug, Clone, Copy)]
pub struct BodyEmitter<'m> {
    mapper: &'m TypeMapper,
}

impl<'m> BodyEmitter<'m> {
    /// Creates an emitter using the given type mapper.
    #[must_use]
    pub const fn new(mapper: &'m TypeMapper) -> Self {
        Self { mapper }
    }

    /// Emits the body of a callable.
    ///
    /// # Errors
    ///
    /// Returns [`pkgmap_core::Error::UnmappedBindType`] if an argument type
    /// has no bind kind.
    pub fn emit(&self, signature: &RoutineSignature) -> Result<CallBody> {
        let mut body = CallBody::default();
        let target = signature.id.to_string();

        if signature.unsupported {
            tracing::warn!(
                routine = %target,
                name = %signature.name,
                "routine takes a composite argument, emitting stub"
            );
            body.push(Instruction::NotImplemented { routine: target });
            return Ok(body);
        }

        body.push(Instruction::CreateCall { target });

        if let Some(holder) = signature.holder.as_ref().filter(|_| signature.requires_composite()) {
            body.push(Instruction::CreateHolder {
                holder: holder.clone(),
            });
        }

        let return_slot = signature.return_slot.and_then(|i| signature.arguments.get(i));
        if let Some(slot) = return_slot {
            body.push(Instruction::BindReturn {
                kind: self.mapper.bind_kind(&slot.descriptor)?,
            });
        }

        for (index, arg) in signature.arguments.iter().enumerate() {
            if Some(index) == signature.return_slot {
                continue;
            }
            body.push(self.bind(signature, arg)?);
        }

        body.push(Instruction::Execute);

        for (index, arg) in signature.arguments.iter().enumerate() {
            if Some(index) == signature.return_slot || !arg.descriptor.direction.is_output() {
                continue;
            }
            if let Some(destination) = destination(signature, index, arg) {
                body.push(Instruction::Unmarshal {
                    name: Some(arg.remote_name().to_string()),
                    destination,
                    conversion: conversion(arg),
                });
            }
        }

        if let Some(slot) = return_slot {
            let destination = if signature.requires_composite() {
                Destination::HolderField(RETURN_FIELD.to_string())
            } else {
                Destination::ReturnLocal
            };
            body.push(Instruction::Unmarshal {
                name: None,
                destination,
                conversion: conversion(slot),
            });
        }

        body.push(Instruction::Return(match signature.return_shape {
            ReturnShape::Void => ReturnValue::Unit,
            ReturnShape::Composite => ReturnValue::Holder,
            ReturnShape::ReturnSlot | ReturnShape::OutAsReturn => ReturnValue::Local,
        }));

        tracing::debug!(
            routine = %signature.id,
            name = %signature.name,
            instructions = body.instructions.len(),
            "emitted body"
        );
        Ok(body)
    }

    fn bind(&self, signature: &RoutineSignature, arg: &TypedArgument) -> Result<Instruction> {
        let name = arg.remote_name().to_string();
        let param = signature.param_for(&name);

        let (mode, source) = match arg.descriptor.direction {
            Direction::In => (
                BindMode::Input,
                param.map_or(ValueSource::Null, |p| ValueSource::Param(p.name.clone())),
            ),
            Direction::Out => (BindMode::Output, ValueSource::Absent),
            Direction::InOut => (
                BindMode::InOut,
                match param {
                    Some(p) if p.mode == ParamMode::InOutRef => ValueSource::RefParam(p.name.clone()),
                    Some(p) => ValueSource::Param(p.name.clone()),
                    None => ValueSource::Null,
                },
            ),
        };

        // only a caller-supplied value can be compared against its default
        let carries_value = matches!(source, ValueSource::Param(_) | ValueSource::RefParam(_));
        let guard = param
            .filter(|p| p.defaulted && carries_value)
            .map(|p| Guard {
                param: p.name.clone(),
                ty: p.ty.nullable.clone(),
                by_ref: p.mode.is_ref(),
                register_output: mode == BindMode::InOut,
            });

        Ok(Instruction::Bind {
            kind: self.mapper.bind_kind(&arg.descriptor)?,
            name,
            length: arg.descriptor.data_length,
            mode,
            source,
            guard,
        })
    }
}

fn destination(signature: &RoutineSignature, index: usize, arg: &TypedArgument) -> Option<Destination> {
    if signature.out_as_return == Some(index) {
        return Some(Destination::ReturnLocal);
    }
    if signature.is_holder_member(index) {
        return Some(Destination::HolderField(naming::snake_case(arg.remote_name())));
    }
    signature
        .param_for(arg.remote_name())
        .filter(|p| p.mode.is_ref())
        .map(|p| Destination::OutParam(p.name.clone()))
}

fn conversion(arg: &TypedArgument) -> Conversion {
    Conversion {
        ty: arg.ty.nullable.clone(),
        cast: arg.ty.cast.clone(),
        wrap_some: arg.ty.wrap_some,
    }
}
