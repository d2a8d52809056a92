//! Non-interactive mode: run one query and print the results.

use std::io::Write;

use anyhow::{bail, Context};

use crate::api::ImageSource;
use crate::session::SearchSession;
use crate::ui::search::Notice;

/// Outcome of a headless run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessSummary {
    pub images: usize,
    pub total: usize,
    pub pages: u32,
}

/// Search for `query`, loading up to `pages` pages.
///
/// Results go to `out` as `id<TAB>tags<TAB>full-size URL<TAB>thumbnail URL`
/// lines; notices go to `notices` as `[level] message`. Fails when a fetch
/// failed.
pub async fn run_headless<S, O, N>(
    source: S,
    query: &str,
    per_page: u32,
    pages: u32,
    out: &mut O,
    notices: &mut N,
) -> anyhow::Result<HeadlessSummary>
where
    S: ImageSource,
    O: Write,
    N: Write,
{
    let mut session = SearchSession::new(source, per_page);
    let mut printed = 0;

    let raised = session.submit(query).await;
    write_notices(notices, &raised)?;
    printed = write_new_images(out, &session, printed)?;

    while session.state().page < pages.max(1) && session.state().can_load_more() {
        let raised = session.load_more().await;
        write_notices(notices, &raised)?;
        printed = write_new_images(out, &session, printed)?;
    }

    let state = session.state();
    if let Some(error) = &state.error {
        bail!("search for '{}' failed: {}", state.query, error);
    }

    Ok(HeadlessSummary {
        images: state.images.len(),
        total: state.total_count,
        pages: state.page,
    })
}

fn write_notices<N: Write>(notices: &mut N, raised: &[Notice]) -> anyhow::Result<()> {
    for notice in raised {
        writeln!(notices, "[{}] {}", notice.level.label(), notice.message)
            .context("failed to write notice")?;
    }
    Ok(())
}

fn write_new_images<S: ImageSource, O: Write>(
    out: &mut O,
    session: &SearchSession<S>,
    already_printed: usize,
) -> anyhow::Result<usize> {
    let images = &session.state().images;
    for image in images.iter().skip(already_printed) {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            image.id, image.tags, image.full_size_url, image.thumbnail_url
        )
        .context("failed to write result")?;
    }
    out.flush().context("failed to flush output")?;
    Ok(images.len())
}
