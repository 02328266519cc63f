use super::*;

use entity::static_page::StaticPageKind;
use sea_orm::EntityTrait;

/// Tests the first write of a page kind.
///
/// Expected: row created with the given content
#[tokio::test]
async fn creates_page_on_first_write() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::StaticPage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let page = StaticPageRepository::new(db)
        .upsert(StaticPageKind::Terms, "v1 terms".to_string())
        .await?;

    assert_eq!(page.kind, StaticPageKind::Terms);
    assert_eq!(page.content, "v1 terms");

    Ok(())
}

/// Tests that rewriting a kind replaces content instead of adding rows.
///
/// Expected: one row per kind, content replaced
#[tokio::test]
async fn replaces_content_on_rewrite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::StaticPage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StaticPageRepository::new(db);
    repo.upsert(StaticPageKind::Privacy, "v1".to_string()).await?;
    let page = repo.upsert(StaticPageKind::Privacy, "v2".to_string()).await?;

    assert_eq!(page.content, "v2");

    let all = entity::prelude::StaticPage::find().all(db).await?;
    assert_eq!(all.len(), 1);

    Ok(())
}

/// Tests that kinds stay independent.
///
/// Expected: writing one kind never touches another
#[tokio::test]
async fn keeps_kinds_independent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::StaticPage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StaticPageRepository::new(db);
    repo.upsert(StaticPageKind::Terms, "terms".to_string()).await?;
    repo.upsert(StaticPageKind::About, "about".to_string()).await?;

    let terms = repo.find_by_kind(StaticPageKind::Terms).await?.unwrap();
    assert_eq!(terms.content, "terms");

    let all = entity::prelude::StaticPage::find().all(db).await?;
    assert_eq!(all.len(), 2);

    Ok(())
}
