//! End-to-end package assembly tests.
//!
//! Drives the whole flow over real (temporary) files with a stub probe:
//! build assets, attach them to reels, validate, and aggregate into the
//! CPL → PKL → package hierarchy.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use dcp_assembly::{
    DcpError, EssenceInfo, EssenceProbe, EssenceType, Package, PackageConfig, Result, SpecVariant,
};

/// Probe that resolves essence metadata from a fixed path table, the
/// way a container parser would from file headers.
struct TableProbe {
    entries: HashMap<PathBuf, EssenceInfo>,
}

impl TableProbe {
    fn new() -> Self {
        TableProbe {
            entries: HashMap::new(),
        }
    }

    fn insert(&mut self, path: &Path, info: EssenceInfo) {
        self.entries.insert(path.to_path_buf(), info);
    }
}

impl EssenceProbe for TableProbe {
    fn probe(&self, path: &Path) -> Result<EssenceInfo> {
        self.entries
            .get(path)
            .cloned()
            .ok_or_else(|| DcpError::InvalidTrackType {
                path: path.to_path_buf(),
            })
    }
}

fn essence(
    essence_type: EssenceType,
    namespace: SpecVariant,
    duration: u32,
) -> EssenceInfo {
    EssenceInfo {
        essence_type,
        namespace,
        duration,
        aspect_ratio: None,
    }
}

fn touch(dir: &tempfile::TempDir, name: &str, size: usize) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, vec![0u8; size]).unwrap();
    path
}

#[test]
fn builds_single_reel_smpte_package() {
    let dir = tempfile::tempdir().unwrap();
    let video = touch(&dir, "feature_v.mxf", 4096);
    let audio = touch(&dir, "feature_a.mxf", 2048);
    let subs = touch(&dir, "feature_s.mxf", 512);

    let mut probe = TableProbe::new();
    probe.insert(&video, essence(EssenceType::Jpeg2000, SpecVariant::Smpte, 144));
    probe.insert(&audio, essence(EssenceType::Pcm24b48k, SpecVariant::Smpte, 144));
    probe.insert(&subs, essence(EssenceType::TimedText, SpecVariant::Smpte, 140));

    let mut package = Package::new(PackageConfig {
        title: "Example Feature".to_string(),
        basename: Some("EXAMPLE_FTR".to_string()),
        ..PackageConfig::default()
    });

    let mut reel = package.new_reel();
    for path in [&video, &audio, &subs] {
        let asset = package.build_asset(path, &probe).unwrap();
        package.add_asset_to_reel(&mut reel, asset).unwrap();
    }

    assert_eq!(package.namespace, SpecVariant::Smpte);

    reel.validate(0).unwrap();

    // Subtitle track was shortest; everything reconciles to 140.
    assert_eq!(reel.main_picture.as_ref().unwrap().duration, 140);
    assert_eq!(reel.main_sound.as_ref().unwrap().duration, 140);
    assert_eq!(reel.main_subtitle.as_ref().unwrap().duration, 140);
    assert_eq!(reel.main_picture.as_ref().unwrap().size, 4096);

    let mut cpl = package.new_cpl();
    cpl.add_reel(reel);
    assert_eq!(cpl.filename, "CPL_EXAMPLE_FTR.xml");
    assert_eq!(cpl.title, "Example Feature");

    let mut pkl = package.new_pkl();
    pkl.add_cpl(cpl);
    assert_eq!(pkl.filename, "PKL_EXAMPLE_FTR.xml");

    package.add_pkl(pkl);
    assert_eq!(package.pkl_count(), 1);
    assert_eq!(package.pkls[0].cpl_count(), 1);
    assert_eq!(package.pkls[0].cpls[0].reel_count(), 1);
}

#[test]
fn rejects_mixed_specification_assets() {
    let dir = tempfile::tempdir().unwrap();
    let video = touch(&dir, "feature_v.mxf", 1024);
    let audio = touch(&dir, "feature_a.mxf", 1024);

    let mut probe = TableProbe::new();
    probe.insert(&video, essence(EssenceType::Jpeg2000, SpecVariant::Smpte, 100));
    probe.insert(&audio, essence(EssenceType::Pcm24b48k, SpecVariant::Interop, 100));

    let mut package = Package::default();
    let mut reel = package.new_reel();

    let picture = package.build_asset(&video, &probe).unwrap();
    package.add_asset_to_reel(&mut reel, picture).unwrap();

    // The first asset committed the package to SMPTE.
    let sound = package.build_asset(&audio, &probe).unwrap();
    let err = package.add_asset_to_reel(&mut reel, sound).unwrap_err();
    assert!(matches!(err, DcpError::SpecificationMismatch));

    // Commitment is one-way; the reel kept only the picture.
    assert_eq!(package.namespace, SpecVariant::Smpte);
    assert!(reel.main_sound.is_none());

    reel.validate(0).unwrap();
}

#[test]
fn rejects_unprobeable_file() {
    let dir = tempfile::tempdir().unwrap();
    let stray = touch(&dir, "README.txt", 64);

    let probe = TableProbe::new();
    let package = Package::default();

    let err = package.build_asset(&stray, &probe).unwrap_err();
    assert!(matches!(err, DcpError::InvalidTrackType { .. }));
}

#[test]
fn missing_file_fails_without_probe() {
    let probe = TableProbe::new();
    let package = Package::default();

    let err = package
        .build_asset(Path::new("/no/such/file.mxf"), &probe)
        .unwrap_err();
    assert!(matches!(err, DcpError::FileOpen { .. }));
}

#[test]
fn failed_asset_build_leaves_reel_usable() {
    let dir = tempfile::tempdir().unwrap();
    let video = touch(&dir, "feature_v.mxf", 1024);
    let stray = touch(&dir, "stray.bin", 16);

    let mut probe = TableProbe::new();
    probe.insert(&video, essence(EssenceType::Jpeg2000, SpecVariant::Interop, 200));

    let mut package = Package::default();
    let mut reel = package.new_reel();

    assert!(package.build_asset(&stray, &probe).is_err());

    let picture = package.build_asset(&video, &probe).unwrap();
    package.add_asset_to_reel(&mut reel, picture).unwrap();
    reel.validate(0).unwrap();

    assert_eq!(package.namespace, SpecVariant::Interop);
}

#[test]
fn package_overrides_flow_into_assets() {
    let dir = tempfile::tempdir().unwrap();
    let video = touch(&dir, "feature_v.mxf", 1024);

    let mut probe = TableProbe::new();
    probe.insert(&video, essence(EssenceType::Jpeg2000, SpecVariant::Smpte, 500));

    let package = Package::new(PackageConfig {
        duration: Some(480),
        entry_point: Some(24),
        aspect_ratio: Some("1.85".to_string()),
        ..PackageConfig::default()
    });

    let asset = package.build_asset(&video, &probe).unwrap();
    assert_eq!(asset.duration, 480);
    assert_eq!(asset.entry_point, 24);
    assert_eq!(asset.aspect_ratio.as_deref(), Some("1.85"));
}

#[test]
fn model_tree_serializes() {
    let dir = tempfile::tempdir().unwrap();
    let video = touch(&dir, "feature_v.mxf", 256);

    let mut probe = TableProbe::new();
    probe.insert(&video, essence(EssenceType::Mpeg2Ves, SpecVariant::Interop, 48));

    let mut package = Package::default();
    let mut reel = package.new_reel();
    let asset = package.build_asset(&video, &probe).unwrap();
    package.add_asset_to_reel(&mut reel, asset).unwrap();
    reel.validate(0).unwrap();

    let mut cpl = package.new_cpl();
    cpl.add_reel(reel);
    let mut pkl = package.new_pkl();
    pkl.add_cpl(cpl);
    package.add_pkl(pkl);

    let json = serde_json::to_string(&package).unwrap();
    assert!(json.contains("feature_v.mxf"));
    assert!(json.contains("Interop"));
}
