//! Image hosting - ImageKit client and the in-memory fallback.

mod memory;

#[cfg(feature = "imagekit")]
mod imagekit;

pub use memory::InMemoryImageHost;

#[cfg(feature = "imagekit")]
pub use imagekit::{ImageKitClient, ImageKitConfig};

use inkpress_core::ports::Transformation;

/// Build an ImageKit-style delivery URL.
///
/// Each directive becomes its own step of a chained `tr:` path segment, so
/// the order of `transformation` is preserved:
/// `https://ik.imagekit.io/demo/tr:q-auto:f-webp:w-1280/blogs/cover.png`.
pub(crate) fn transformed_url(
    endpoint: &str,
    path: &str,
    transformation: &[Transformation],
) -> String {
    let endpoint = endpoint.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if transformation.is_empty() {
        return format!("{endpoint}/{path}");
    }

    let chain = transformation
        .iter()
        .map(directive)
        .collect::<Vec<_>>()
        .join(":");

    format!("{endpoint}/tr:{chain}/{path}")
}

fn directive(step: &Transformation) -> String {
    match step {
        Transformation::Quality(value) => format!("q-{value}"),
        Transformation::Format(value) => format!("f-{value}"),
        Transformation::Width(value) => format!("w-{value}"),
    }
}
