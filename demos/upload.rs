//! Uploads a file to Yandex Object Storage and reads it back.
//!
//! ```sh
//! export YANDEX_CLOUD_S3_ACCESS_KEY_ID=...
//! export YANDEX_CLOUD_S3_ACCESS_KEY=...
//! export YANDEX_CLOUD_S3_BUCKET=my-bucket
//! RUST_LOG=ycs3=debug cargo run --example upload -- ./photo.jpg [key]
//! ```

use std::env;

use anyhow::{bail, Context};
use ycs3::{Bucket, StorageClass};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        bail!("usage: upload <file> [key]");
    };
    let key = args.next();

    let bucket = Bucket::from_env().context("reading configuration from the environment")?;

    let response = bucket.upload_file(&path, key.as_deref())?;
    println!("PUT {}: {}", path, response.status_code());

    let key = match key {
        Some(key) => key,
        None => ycs3::utils::key_for_path(&path)?,
    };
    let stored = bucket.get_object(&key)?;
    let local = std::fs::read(&path)?;
    if stored.as_slice() != local.as_slice() {
        bail!("{} differs from the uploaded copy", key);
    }
    println!("GET {}: {} bytes match", key, stored.as_slice().len());

    // Same content again, archived.
    let archived = format!("{}.cold", key);
    bucket.put_object_with_storage_class(&archived, &local, StorageClass::Cold)?;
    bucket.delete_object(&archived)?;

    Ok(())
}
