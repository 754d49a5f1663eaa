mod support;

use newsdesk_core::application::commands::news::{CreateNewsCommand, UpdateNewsCommand};
use support::{admin, TestWorld};

fn create(title: &str) -> CreateNewsCommand {
    CreateNewsCommand::builder()
        .title(title)
        .author("Jane Doe")
        .body("<p>body</p>")
        .build()
        .unwrap()
}

#[tokio::test]
async fn same_title_yields_numbered_sequence() {
    let world = TestWorld::new();
    let service = world.news_service();
    let actor = admin();

    let first = service.create_news(&actor, create("Hello World")).await.unwrap();
    let second = service.create_news(&actor, create("Hello World")).await.unwrap();
    let third = service.create_news(&actor, create("Hello World")).await.unwrap();

    assert_eq!(first.slug, "hello-world");
    assert_eq!(second.slug, "hello-world-1");
    assert_eq!(third.slug, "hello-world-2");
}

#[tokio::test]
async fn resave_without_title_change_keeps_slug() {
    let world = TestWorld::new();
    let service = world.news_service();
    let actor = admin();

    let created = service.create_news(&actor, create("Hello World")).await.unwrap();
    let updated = service
        .update_news(
            &actor,
            UpdateNewsCommand {
                id: created.id,
                body: Some("<p>edited</p>".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.slug, "hello-world");
    assert_eq!(world.store.rename_count(), 0);
}

#[tokio::test]
async fn resubmitting_the_same_title_keeps_slug() {
    let world = TestWorld::new();
    let service = world.news_service();
    let actor = admin();

    let created = service.create_news(&actor, create("Hello World")).await.unwrap();
    let updated = service
        .update_news(
            &actor,
            UpdateNewsCommand {
                id: created.id,
                title: Some("Hello World".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.slug, "hello-world");
    assert_eq!(world.store.rename_count(), 0);
}

#[tokio::test]
async fn pagination_marker_is_accepted_even_when_colliding() {
    let world = TestWorld::new();
    let service = world.news_service();
    let actor = admin();

    let first = service.create_news(&actor, create("Page 2")).await.unwrap();
    let second = service.create_news(&actor, create("Page 2")).await.unwrap();

    // No -1 suffix: segments with the marker skip disambiguation entirely.
    assert_eq!(first.slug, "page-2");
    assert_eq!(second.slug, "page-2");
}

#[tokio::test]
async fn manual_slug_is_adopted_verbatim() {
    let world = TestWorld::new();
    let service = world.news_service();
    let actor = admin();

    let command = CreateNewsCommand::builder()
        .title("Hello World")
        .author("Jane Doe")
        .slug("custom-path")
        .build()
        .unwrap();
    let created = service.create_news(&actor, command).await.unwrap();
    assert_eq!(created.slug, "custom-path");
}

#[tokio::test]
async fn diacritics_are_stripped_by_the_generator() {
    let world = TestWorld::new();
    let service = world.news_service();
    let actor = admin();

    let created = service.create_news(&actor, create("Señor Café Olé")).await.unwrap();
    assert_eq!(created.slug, "senor-cafe-ole");
}
