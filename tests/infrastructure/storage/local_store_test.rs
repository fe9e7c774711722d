use bytes::Bytes;

use healthdesk::application::ports::{StagingStore, StagingStoreError};
use healthdesk::domain::StoragePath;
use healthdesk::infrastructure::storage::LocalStagingStore;

fn store_in_tempdir() -> (LocalStagingStore, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStagingStore::new(dir.path().to_path_buf()).unwrap();
    (store, dir)
}

#[tokio::test]
async fn given_bytes_when_storing_then_object_exists_with_reported_size() {
    let (store, dir) = store_in_tempdir();
    let path = StoragePath::for_upload("report.pdf");

    let size = store
        .store(&path, Bytes::from_static(b"pdf bytes"))
        .await
        .unwrap();

    assert_eq!(size, 9);
    assert_eq!(store.head(&path).await.unwrap(), 9);
    assert!(dir.path().join(path.as_str()).exists());
}

#[tokio::test]
async fn given_stored_object_when_deleting_then_nothing_remains_on_disk() {
    let (store, dir) = store_in_tempdir();
    let path = StoragePath::for_upload("scan.png");

    store
        .store(&path, Bytes::from_static(b"image data"))
        .await
        .unwrap();
    store.delete(&path).await.unwrap();

    assert!(matches!(
        store.head(&path).await,
        Err(StagingStoreError::NotFound(_))
    ));
    assert!(!dir.path().join(path.as_str()).exists());
}

#[tokio::test]
async fn given_missing_object_when_deleting_then_returns_delete_failed() {
    let (store, _dir) = store_in_tempdir();
    let path = StoragePath::for_upload("never-written.txt");

    assert!(matches!(
        store.delete(&path).await,
        Err(StagingStoreError::DeleteFailed(_))
    ));
}

#[tokio::test]
async fn given_two_uploads_of_same_filename_when_storing_then_both_objects_exist() {
    let (store, _dir) = store_in_tempdir();
    let first = StoragePath::for_upload("report.pdf");
    let second = StoragePath::for_upload("report.pdf");

    store
        .store(&first, Bytes::from_static(b"first"))
        .await
        .unwrap();
    store
        .store(&second, Bytes::from_static(b"second"))
        .await
        .unwrap();

    assert_eq!(store.head(&first).await.unwrap(), 5);
    assert_eq!(store.head(&second).await.unwrap(), 6);
}
