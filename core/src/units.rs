use std::borrow::Cow;

use crate::flatten::FlatToken;

pub const PIXEL_UNIT: &str = "px";

/// Value as written into the stylesheet. Length categories get a `px` suffix
/// unless the value already contains `px` anywhere.
pub fn css_value(token: &FlatToken) -> Cow<'_, str> {
    if token.token_type.is_length() && !token.value.contains(PIXEL_UNIT) {
        Cow::Owned(format!("{}{PIXEL_UNIT}", token.value))
    } else {
        Cow::Borrowed(&token.value)
    }
}
