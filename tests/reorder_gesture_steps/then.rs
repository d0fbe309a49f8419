//! Then steps for drag-reorder BDD scenarios.

use super::world::{ReorderWorld, split_titles, titles_of};
use rstest_bdd_macros::then;
use syncboard::list::adapters::memory::RemoteCall;
use syncboard::list::services::reorder::ReorderError;
use syncboard::notice::domain::NoticeKind;

#[then(r#"the local cache lists "{titles}""#)]
fn cache_lists(world: &ReorderWorld, titles: String) -> Result<(), eyre::Report> {
    let found = titles_of(&world.store.snapshot());
    let expected = split_titles(&titles);
    if found != expected {
        return Err(eyre::eyre!("expected cache {expected:?}, found {found:?}"));
    }
    Ok(())
}

#[then(r#"the remote store lists "{titles}""#)]
fn remote_lists(world: &ReorderWorld, titles: String) -> Result<(), eyre::Report> {
    let found = titles_of(&world.remote.tasks());
    let expected = split_titles(&titles);
    if found != expected {
        return Err(eyre::eyre!(
            "expected remote store {expected:?}, found {found:?}"
        ));
    }
    Ok(())
}

#[then("the drop fails with a remote error")]
fn drop_fails_remote(world: &ReorderWorld) -> Result<(), eyre::Report> {
    if !matches!(world.last_drop, Some(Err(ReorderError::Remote(_)))) {
        return Err(eyre::eyre!(
            "expected a remote failure, got {:?}",
            world.last_drop
        ));
    }
    Ok(())
}

#[then("no order was sent to the remote store")]
fn no_persist_call(world: &ReorderWorld) -> Result<(), eyre::Report> {
    let calls = world.remote.calls();
    if calls.contains(&RemoteCall::PersistOrder) {
        return Err(eyre::eyre!(
            "expected no persist_order call, found calls {calls:?}"
        ));
    }
    Ok(())
}

#[then(r#"an error notice says "{message}""#)]
fn error_notice_says(world: &ReorderWorld, message: String) -> Result<(), eyre::Report> {
    let notice = world
        .notices
        .current()
        .ok_or_else(|| eyre::eyre!("no notice is displayed"))?;
    if notice.kind != NoticeKind::Error || notice.message != message {
        return Err(eyre::eyre!(
            "expected an error notice saying {:?}, found a {} notice saying {:?}",
            message,
            notice.kind,
            notice.message
        ));
    }
    Ok(())
}

#[then("no notice is displayed")]
fn no_notice(world: &ReorderWorld) -> Result<(), eyre::Report> {
    if let Some(notice) = world.notices.current() {
        return Err(eyre::eyre!("expected no notice, found {:?}", notice.message));
    }
    Ok(())
}
