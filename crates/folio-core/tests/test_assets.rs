use std::time::Duration;

use folio_core::assets::{load_image, DecodedImage, ImageCache, ImagePolicy, ImageSource};
use folio_core::error::FolioError;

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]));
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).unwrap();
    out.into_inner()
}

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

#[test]
fn test_default_host_allowed() {
    let policy = ImagePolicy::default();
    assert!(policy
        .check_url("https://cdn.hashnode.com/res/hashnode/image/upload/a.png")
        .is_ok());
}

#[test]
fn test_host_match_is_case_insensitive() {
    let policy = ImagePolicy::default();
    assert!(policy.is_host_allowed("CDN.hashnode.com"));
}

#[test]
fn test_other_host_rejected() {
    let policy = ImagePolicy::default();
    let err = policy.check_url("https://evil.example.com/a.png").unwrap_err();
    assert!(
        matches!(err, FolioError::ImageHostNotAllowed(ref host) if host == "evil.example.com"),
        "got: {err}"
    );
}

#[test]
fn test_subdomain_not_implicitly_allowed() {
    let policy = ImagePolicy::default();
    assert!(!policy.is_host_allowed("img.cdn.hashnode.com"));
}

#[test]
fn test_remote_rejected_before_any_fetch() {
    let dir = tempfile::tempdir().unwrap();
    let cache = ImageCache::new(dir.path(), Duration::from_secs(60));
    let source = ImageSource::parse("https://not-allowed.invalid/x.png");
    let err = load_image(&source, &ImagePolicy::default(), &cache).unwrap_err();
    assert!(matches!(err, FolioError::ImageHostNotAllowed(_)), "got: {err}");
}

// ---------------------------------------------------------------------------
// Source parsing
// ---------------------------------------------------------------------------

#[test]
fn test_parse_source() {
    assert_eq!(
        ImageSource::parse("https://cdn.hashnode.com/a.png"),
        ImageSource::Remote("https://cdn.hashnode.com/a.png".into())
    );
    assert!(matches!(
        ImageSource::parse("assets/me.png"),
        ImageSource::Local(_)
    ));
}

// ---------------------------------------------------------------------------
// Cache
// ---------------------------------------------------------------------------

#[test]
fn test_cache_hit_within_ttl() {
    let dir = tempfile::tempdir().unwrap();
    let cache = ImageCache::new(dir.path(), Duration::from_secs(3600));
    let url = "https://cdn.hashnode.com/a.png";

    assert!(cache.get_fresh(url).is_none());
    cache.store(url, b"bytes").unwrap();
    assert_eq!(cache.get_fresh(url).unwrap(), b"bytes");
}

#[test]
fn test_cache_expired_with_zero_ttl() {
    let dir = tempfile::tempdir().unwrap();
    let cache = ImageCache::new(dir.path(), Duration::ZERO);
    let url = "https://cdn.hashnode.com/a.png";
    cache.store(url, b"bytes").unwrap();
    assert!(cache.get_fresh(url).is_none());
}

#[test]
fn test_cache_entries_are_per_url() {
    let dir = tempfile::tempdir().unwrap();
    let cache = ImageCache::new(dir.path(), Duration::from_secs(3600));
    assert_ne!(
        cache.entry_path("https://cdn.hashnode.com/a.png"),
        cache.entry_path("https://cdn.hashnode.com/b.png")
    );
}

#[test]
fn test_cache_file_name_is_stable() {
    let cache = ImageCache::new("/tmp/folio-images", Duration::from_secs(3600));
    assert_eq!(
        cache.entry_path("https://cdn.hashnode.com/res/portrait.png"),
        std::path::Path::new("/tmp/folio-images").join("b061cd3236316e1a.img")
    );
}

#[test]
fn test_remote_served_from_cache() {
    let dir = tempfile::tempdir().unwrap();
    let cache = ImageCache::new(dir.path(), Duration::from_secs(3600));
    let url = "https://cdn.hashnode.com/cached.png";
    cache.store(url, &png_bytes(3, 2)).unwrap();

    let image = load_image(&ImageSource::parse(url), &ImagePolicy::default(), &cache).unwrap();
    assert_eq!((image.width, image.height), (3, 2));
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

#[test]
fn test_local_image_decodes_to_rgba() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("me.png");
    std::fs::write(&path, png_bytes(4, 5)).unwrap();

    let cache = ImageCache::new(dir.path().join("cache"), Duration::from_secs(60));
    let image = load_image(
        &ImageSource::Local(path),
        &ImagePolicy::default(),
        &cache,
    )
    .unwrap();
    assert_eq!(image.width, 4);
    assert_eq!(image.height, 5);
    assert_eq!(image.rgba.len(), 4 * 5 * 4);
    assert_eq!(&image.rgba[..4], &[10, 20, 30, 255]);
}

#[test]
fn test_garbage_is_image_error() {
    let err = DecodedImage::decode(b"not an image").unwrap_err();
    assert!(matches!(err, FolioError::ImageError(_)), "got: {err}");
}
