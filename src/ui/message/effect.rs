//! One-shot effects for the message screen.

use crate::ui::mvi::Effect;

/// One-shot signals from the message screen.
///
/// Reserved extension point, no variants yet.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageEffect {}

impl Effect for MessageEffect {}
