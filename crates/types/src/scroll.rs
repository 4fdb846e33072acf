//! Scrolling and inset-reference tokens passed through to the host.
use serde::{Deserialize, Serialize};

/// The main scroll axis of the whole layout.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum ScrollDirection {
    #[default]
    Vertical,
    Horizontal,
}

/// How a section scrolls perpendicular to the main axis.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum OrthogonalScrollingBehavior {
    #[default]
    None,
    Continuous,
    ContinuousGroupLeadingBoundary,
    Paging,
    GroupPaging,
    GroupPagingCentered,
}

/// The boundary a section's content insets are measured from.
///
/// Opaque to the engine; forwarded to the host unchanged.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum InsetsReference {
    #[default]
    Automatic,
    None,
    SafeArea,
    LayoutMargins,
    ReadableContent,
}
