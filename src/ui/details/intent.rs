//! Intents for the details screen.

use crate::ui::mvi::Intent;

/// User actions on the details screen. Empty: dispatch is a no-op by
/// construction.
#[derive(Debug, Clone)]
pub enum DetailsIntent {}

impl Intent for DetailsIntent {}
