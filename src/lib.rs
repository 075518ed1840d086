//! Egel turns the four arithmetic methods of the Mongolian "Egel" school
//! tradition into step-by-step traces and staged SVG diagrams.
//!
//! # Pipeline overview
//!
//! 1. **Trace**: an engine (`trace_addition`, `trace_subtraction`,
//!    `trace_multiplication`, `trace_division`) replays the classroom
//!    procedure digit by digit and records every event into an immutable
//!    trace record.
//! 2. **Render**: the matching renderer (`render_addition`, ..) lays the
//!    trace out on a cell grid and draws it as SVG at a chosen reveal
//!    stage, from bare grid to finished result.
//! 3. **Serialize**: traces and diagrams convert to JSON via [`to_json`]
//!    for storage or transport.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: tracing and rendering are pure; the same operands
//!   and options always produce the same trace and byte-identical SVG.
//! - **Layout never decides arithmetic**: results come from the digit
//!   algorithms, and renderers only draw what the trace records.
//! - **Operands are capped** at [`MAX_OPERAND`] so every derived quantity
//!   fits in `u64`.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod foundation;
mod render;
mod trace;

pub use config::options::{
    AddRenderOptions, AddStage, DivColorMode, DivRenderOptions, DivStage, HelperPanel,
    MulColorMode, MulRenderOptions, MulStage, QuotientAlign, SubRenderOptions, SubStage,
};
pub use foundation::digits::{digit_count, digits_of, to_display, value_of};
pub use foundation::error::{EgelError, EgelResult};
pub use render::add::{AddLayout, AddRenderData, AddRowIndex, render_addition};
pub use render::color::{
    LATTICE_STROKE, add_place_color, checker_color, css_color, place_color, source_color,
    step_color,
};
pub use render::div::{DivLayout, DivRenderData, render_division};
pub use render::grid::GridMap;
pub use render::mul::{MulLayout, MulRenderData, render_multiplication};
pub use render::sub::{SubLayout, SubRenderData, SubRowIndex, render_subtraction};
pub use render::svg::{
    FontFamily, LineStyle, RectStyle, SvgDoc, TextAnchor, TextStyle, escape_xml,
};
pub use render::{Diagram, to_json};
pub use trace::MAX_OPERAND;
pub use trace::add::{AddColumn, AddMark, AddTrace, CARRY_ROW, trace_addition};
pub use trace::div::{DivHelperEntry, DivStep, DivTrace, MAX_DIV_STEPS, trace_division};
pub use trace::mul::{
    MulCarry, MulCell, MulColumn, MulMark, MulTrace, multiply_digits, trace_multiplication,
};
pub use trace::sub::{A_LT_B_WARNING, SubRule, SubStep, SubTrace, trace_subtraction};
