//! Handler for `pantree tree`.

use std::path::Path;

use miette::Result;

use pantree_cpan::repository::CpanRepository;
use pantree_resolver::resolver::Resolver;

pub async fn exec(names: &[String], path: &Path, depth: Option<usize>) -> Result<()> {
    tracing::debug!(
        "rendering {} distribution(s) from {}",
        names.len(),
        path.display()
    );

    let repository = CpanRepository::open(path)?;
    let resolver = Resolver::new(repository);
    let forest = resolver.resolve(names).await?;

    // render_tree terminates every root's block with a newline already.
    print!("{}", forest.render_tree(depth));
    Ok(())
}
