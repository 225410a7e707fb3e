//! Pure pagination math and page chunking.

use std::fmt::Display;

use crate::config::JoinMode;
use crate::error::ConfigError;

/// One rendering unit of paginated content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page<T> {
    /// Consecutive items concatenated with a separator.
    Text(String),
    /// Consecutive items kept as a list.
    Items(Vec<T>),
}

/// Compute the number of pages for a paginated list.
pub fn total_pages(item_count: usize, per_page: usize) -> usize {
    item_count.div_ceil(per_page.max(1))
}

/// Partition `items` into consecutive pages of `per_page` items.
///
/// The last page may be shorter. In [`JoinMode::Joined`] each page is the
/// items' display text joined with the separator.
pub fn paginate<T: Display>(
    items: Vec<T>,
    per_page: usize,
    join: &JoinMode,
) -> Result<Vec<Page<T>>, ConfigError> {
    if per_page == 0 {
        return Err(ConfigError::ZeroPageSize);
    }
    if items.is_empty() {
        return Err(ConfigError::EmptyItems);
    }

    let mut pages = Vec::with_capacity(total_pages(items.len(), per_page));
    let mut remaining = items.into_iter();

    loop {
        let chunk: Vec<T> = remaining.by_ref().take(per_page).collect();
        if chunk.is_empty() {
            break;
        }

        let page = match join {
            JoinMode::Joined { separator } => Page::Text(
                chunk
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(separator),
            ),
            JoinMode::Listed => Page::Items(chunk),
        };
        pages.push(page);
    }

    Ok(pages)
}
