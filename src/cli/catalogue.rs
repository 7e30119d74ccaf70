//! CLI commands for the proposal catalogue

use crate::display::{format_features, format_logic};

/// Print the proposed analytical features
pub fn handle_features_command() {
    println!("{}", format_features());
}

/// Print the dynamic pricing walkthrough
pub fn handle_logic_command() {
    println!("{}", format_logic());
}
