//! Render configuration: per-operation option bags and the stage enums that
//! drive progressive reveal.
//!
//! Every option bag is an immutable value the caller fills once per render
//! call. Fields carry serde defaults so partial JSON configurations
//! deserialize; [`validate`](AddRenderOptions::validate) checks the numeric
//! fields a boundary layer cannot constrain by type alone.

use crate::foundation::error::{EgelError, EgelResult};

#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize, PartialEq, Eq, PartialOrd, Ord)]
/// Progressive reveal stages of the addition diagram, indexed `1..=5`.
pub enum AddStage {
    /// Grid lines only.
    Grid,
    /// Adds operand digits, the plus sign and the separator rule.
    Operands,
    /// Adds ten-completion underline marks.
    Marks,
    /// Adds carry digits in the carry row.
    Carries,
    /// Adds the result digits.
    #[default]
    Result,
}

impl AddStage {
    /// Map a raw stage index to a stage, clamping into `1..=5`.
    pub fn from_index(index: u8) -> Self {
        match index.clamp(1, 5) {
            1 => Self::Grid,
            2 => Self::Operands,
            3 => Self::Marks,
            4 => Self::Carries,
            _ => Self::Result,
        }
    }

    /// Index of this stage in the documented `1..=5` range.
    pub fn index(self) -> u8 {
        match self {
            Self::Grid => 1,
            Self::Operands => 2,
            Self::Marks => 3,
            Self::Carries => 4,
            Self::Result => 5,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize, PartialEq, Eq, PartialOrd, Ord)]
/// Progressive reveal stages of the subtraction diagram, indexed `0..=3`.
pub enum SubStage {
    /// Grid lines only.
    Grid,
    /// Adds both operands and the minus sign.
    Operands,
    /// Adds borrowed digits and the underline rule.
    Marks,
    /// Adds the result digits.
    #[default]
    Result,
}

impl SubStage {
    /// Map a raw stage index to a stage, clamping into `0..=3`.
    pub fn from_index(index: u8) -> Self {
        match index.min(3) {
            0 => Self::Grid,
            1 => Self::Operands,
            2 => Self::Marks,
            _ => Self::Result,
        }
    }

    /// Index of this stage in the documented `0..=3` range.
    pub fn index(self) -> u8 {
        match self {
            Self::Grid => 0,
            Self::Operands => 1,
            Self::Marks => 2,
            Self::Result => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize, PartialEq, Eq, PartialOrd, Ord)]
/// Progressive reveal stages of the multiplication diagram, indexed `0..=3`.
pub enum MulStage {
    /// Grid lines only.
    Grid,
    /// Adds operand digits and the dot-times-dot header.
    Digits,
    /// Adds partial-product blocks.
    Blocks,
    /// Adds underline marks, the carry row and the result row.
    #[default]
    Carries,
}

impl MulStage {
    /// Map a raw stage index to a stage, clamping into `0..=3`.
    pub fn from_index(index: u8) -> Self {
        match index.min(3) {
            0 => Self::Grid,
            1 => Self::Digits,
            2 => Self::Blocks,
            _ => Self::Carries,
        }
    }

    /// Index of this stage in the documented `0..=3` range.
    pub fn index(self) -> u8 {
        match self {
            Self::Grid => 0,
            Self::Digits => 1,
            Self::Blocks => 2,
            Self::Carries => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize, PartialEq, Eq, PartialOrd, Ord)]
/// Progressive reveal stages of the division diagram, indexed `0..=3`.
pub enum DivStage {
    /// Paper, rules and grid only.
    Frame,
    /// Adds dividend, divisor and the helper table.
    Setup,
    /// Adds the greedy subtraction rows.
    Steps,
    /// Adds the footer with the total quotient and remainder badge.
    #[default]
    Result,
}

impl DivStage {
    /// Map a raw stage index to a stage, clamping into `0..=3`.
    pub fn from_index(index: u8) -> Self {
        match index.min(3) {
            0 => Self::Frame,
            1 => Self::Setup,
            2 => Self::Steps,
            _ => Self::Result,
        }
    }

    /// Index of this stage in the documented `0..=3` range.
    pub fn index(self) -> u8 {
        match self {
            Self::Frame => 0,
            Self::Setup => 1,
            Self::Steps => 2,
            Self::Result => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
/// Digit coloring strategies for the multiplication diagram.
pub enum MulColorMode {
    /// All digits in plain ink.
    #[default]
    Plain,
    /// Translucent background markers behind each `a` digit and its blocks.
    Marker,
    /// Digits colored by the `a` digit that produced them.
    SourceColor,
    /// Block digits colored by checkerboard parity.
    Checker,
}

impl MulColorMode {
    /// Map a raw mode index to a mode, clamping into `0..=3`.
    pub fn from_index(index: u8) -> Self {
        match index.min(3) {
            0 => Self::Plain,
            1 => Self::Marker,
            2 => Self::SourceColor,
            _ => Self::Checker,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
/// Coloring strategies for division subtract rows.
pub enum DivColorMode {
    /// All rows in plain ink.
    Plain,
    /// Each round in its own color from the step palette.
    #[default]
    Step,
}

impl DivColorMode {
    /// Map a raw mode index to a mode; zero is plain, everything else colors by step.
    pub fn from_index(index: u8) -> Self {
        if index == 0 { Self::Plain } else { Self::Step }
    }
}

#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
/// Horizontal alignment of per-step quotient chunks in the division diagram.
pub enum QuotientAlign {
    /// Chunks start at the left edge of the quotient area.
    Left,
    /// Chunks end at the right edge of the quotient area.
    #[default]
    Right,
}

#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
/// Placement of the division helper table ("hürd").
pub enum HelperPanel {
    /// Banner box above the grid.
    #[default]
    Top,
    /// Panel to the right of the grid.
    Side,
    /// Hidden.
    None,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Rendering options for the addition diagram.
pub struct AddRenderOptions {
    /// Cell edge length in pixels.
    #[serde(default = "default_add_cell")]
    pub cell: f64,
    /// Outer padding in pixels.
    #[serde(default = "default_add_pad")]
    pub pad: f64,
    /// Draw the background grid.
    #[serde(default = "default_true")]
    pub show_grid: bool,
    /// Draw ten-completion underline marks.
    #[serde(default = "default_true")]
    pub show_marks: bool,
    /// Draw carry digits in the carry row.
    #[serde(default = "default_true")]
    pub show_carry: bool,
    /// Reveal stage.
    #[serde(default)]
    pub stage: AddStage,
}

impl Default for AddRenderOptions {
    fn default() -> Self {
        Self {
            cell: default_add_cell(),
            pad: default_add_pad(),
            show_grid: true,
            show_marks: true,
            show_carry: true,
            stage: AddStage::default(),
        }
    }
}

impl AddRenderOptions {
    /// Validate numeric fields.
    pub fn validate(&self) -> EgelResult<()> {
        if !self.cell.is_finite() || self.cell <= 0.0 {
            return Err(EgelError::domain("cell must be finite and > 0"));
        }
        if !self.pad.is_finite() || self.pad < 0.0 {
            return Err(EgelError::domain("pad must be finite and >= 0"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Rendering options for the subtraction diagram.
pub struct SubRenderOptions {
    /// Cell edge length in pixels.
    #[serde(default = "default_unit")]
    pub unit: f64,
    /// Draw the background grid.
    #[serde(default = "default_true")]
    pub show_grid: bool,
    /// Draw borrowed digits and the underline rule.
    #[serde(default = "default_true")]
    pub show_marks: bool,
    /// Reveal stage.
    #[serde(default)]
    pub stage: SubStage,
}

impl Default for SubRenderOptions {
    fn default() -> Self {
        Self {
            unit: default_unit(),
            show_grid: true,
            show_marks: true,
            stage: SubStage::default(),
        }
    }
}

impl SubRenderOptions {
    /// Validate numeric fields.
    pub fn validate(&self) -> EgelResult<()> {
        validate_unit(self.unit)
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Rendering options for the multiplication diagram.
pub struct MulRenderOptions {
    /// Cell edge length in pixels.
    #[serde(default = "default_unit")]
    pub unit: f64,
    /// Draw the background lattice.
    #[serde(default = "default_true")]
    pub show_grid: bool,
    /// Draw ten-completion underline marks.
    #[serde(default = "default_true")]
    pub show_marks: bool,
    /// Draw carry digits in the carry row.
    #[serde(default = "default_true")]
    pub show_carry: bool,
    /// Scale factor applied to carry digit text.
    #[serde(default = "default_carry_scale")]
    pub carry_scale: f64,
    /// Digit coloring strategy.
    #[serde(default)]
    pub color_mode: MulColorMode,
    /// Per-digit color overrides for `a` (units first); empty entries fall
    /// back to the source palette.
    #[serde(default)]
    pub a_colors: Vec<String>,
    /// First checkerboard color token.
    #[serde(default = "default_checker_a")]
    pub checker_a: String,
    /// Second checkerboard color token.
    #[serde(default = "default_checker_b")]
    pub checker_b: String,
    /// Reveal stage.
    #[serde(default)]
    pub stage: MulStage,
}

impl Default for MulRenderOptions {
    fn default() -> Self {
        Self {
            unit: default_unit(),
            show_grid: true,
            show_marks: true,
            show_carry: true,
            carry_scale: default_carry_scale(),
            color_mode: MulColorMode::default(),
            a_colors: Vec::new(),
            checker_a: default_checker_a(),
            checker_b: default_checker_b(),
            stage: MulStage::default(),
        }
    }
}

impl MulRenderOptions {
    /// Validate numeric fields.
    pub fn validate(&self) -> EgelResult<()> {
        validate_unit(self.unit)?;
        if !self.carry_scale.is_finite() || self.carry_scale <= 0.0 {
            return Err(EgelError::domain("carry_scale must be finite and > 0"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Rendering options for the division diagram.
pub struct DivRenderOptions {
    /// Cell edge length in pixels.
    #[serde(default = "default_unit")]
    pub unit: f64,
    /// Draw the background grid.
    #[serde(default = "default_true")]
    pub show_grid: bool,
    /// Subtract row coloring strategy.
    #[serde(default)]
    pub color_mode: DivColorMode,
    /// Alignment of per-step quotient chunks.
    #[serde(default)]
    pub align: QuotientAlign,
    /// Placement of the helper table.
    #[serde(default)]
    pub helper: HelperPanel,
    /// Render everything in black ink (print-friendly).
    #[serde(default)]
    pub monochrome: bool,
    /// Draw the remainder badge under the grid.
    #[serde(default = "default_true")]
    pub show_remainder: bool,
    /// Reveal stage.
    #[serde(default)]
    pub stage: DivStage,
}

impl Default for DivRenderOptions {
    fn default() -> Self {
        Self {
            unit: default_unit(),
            show_grid: true,
            color_mode: DivColorMode::default(),
            align: QuotientAlign::default(),
            helper: HelperPanel::default(),
            monochrome: false,
            show_remainder: true,
            stage: DivStage::default(),
        }
    }
}

impl DivRenderOptions {
    /// Validate numeric fields.
    pub fn validate(&self) -> EgelResult<()> {
        validate_unit(self.unit)
    }
}

fn validate_unit(unit: f64) -> EgelResult<()> {
    if !unit.is_finite() || unit <= 0.0 {
        return Err(EgelError::domain("unit must be finite and > 0"));
    }
    Ok(())
}

fn default_add_cell() -> f64 {
    42.0
}

fn default_add_pad() -> f64 {
    18.0
}

fn default_unit() -> f64 {
    56.0
}

fn default_carry_scale() -> f64 {
    1.0
}

fn default_checker_a() -> String {
    "red".to_string()
}

fn default_checker_b() -> String {
    "blue".to_string()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
#[path = "../../tests/unit/config/options.rs"]
mod tests;
