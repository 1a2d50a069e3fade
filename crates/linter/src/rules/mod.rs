mod if_spacing;

pub use if_spacing::{IfSpacingRuleImpl, IF_SPACING};
