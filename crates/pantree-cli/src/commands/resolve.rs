//! Handler for `pantree resolve`.

use std::path::Path;

use miette::Result;

use pantree_cpan::repository::CpanRepository;
use pantree_resolver::resolver::Resolver;

pub async fn exec(names: &[String], path: &Path, indent: &str) -> Result<()> {
    tracing::debug!(
        "resolving {} distribution(s) from {}",
        names.len(),
        path.display()
    );

    let repository = CpanRepository::open(path)?;
    let resolver = Resolver::new(repository);
    let forest = resolver.resolve(names).await?;

    println!("{}", forest.to_json(indent));
    Ok(())
}
