pub mod geom;
pub mod leaf;
pub mod pipelines;
pub mod plot;
pub mod scene;
pub mod shaders;
pub mod state;
pub mod stats;
pub mod table;
pub mod vertex;
pub mod viewport;
pub mod wire;

use std::path;

use anyhow::Context as _;

use winit::dpi;

// Run configuration.
// Missing fields fall back to the defaults below when deserialized
#[derive(Clone)]
#[derive(Debug)]
#[derive(serde::Deserialize)]
#[serde(default)]
pub struct Config {
    pub path: path::PathBuf,
    pub size: dpi::PhysicalSize<u32>,
    pub style: scene::LineStyle,
    pub background: [f32; 3],
}

impl Default for Config {
    fn default() -> Self { Self::new() }
}

impl Config {
    pub const INPUT: &'static str = "bvh.csv";

    pub fn new() -> Self {
        Self {
            path: path::PathBuf::from(Self::INPUT),
            size: dpi::PhysicalSize::new(960, 720),
            style: scene::LineStyle::new(),
            background: [1.; 3],
        }
    }
}

/// Loads the node table and turns its populated leaves into a scene.
///
/// Nothing is returned until the whole table has parsed,
/// so a bad row never leaves a partial scene behind.
pub fn load_scene<P: AsRef<path::Path>>(
    path: P,
    style: scene::LineStyle,
) -> table::LoadResult<(scene::Scene, stats::HierarchyStats)> {
    let records = table::load(path)?;

    let stats = stats::HierarchyStats::new(&records);

    log::info!("Loaded BVH with {}", stats);

    if stats.inverted > 0 {
        log::warn!("{} leaf boxes have max below min", stats.inverted);
    }

    let scene = scene::Scene::from_leaves(leaf::leaves(&records), style);

    Ok((scene, stats))
}

// The whole pipeline, from `config.path` to a closed viewport.
// Errors name the stage they came from
pub fn run(config: Config) -> anyhow::Result<()> {
    let (scene, _) = load_scene(&config.path, config.style)
        .with_context(|| format!("load stage: {}", config.path.display()))?;

    scene
        .present(viewport::Viewport::new(&config))
        .context("render stage")
}

#[cfg(test)]
mod tests {
    use std::{fs, io::Write as _};

    use super::*;

    fn write_table(dir: &tempfile::TempDir, body: &str) -> path::PathBuf {
        let path = dir.path().join(Config::INPUT);

        fs::File::create(&path)
            .unwrap()
            .write_all(format!("\
                MinX,MinY,MinZ,MaxX,MaxY,MaxZ,ChildIndex,TriangleCount\n{body}\
            ").as_bytes())
            .unwrap();

        path
    }

    #[test]
    fn config_fills_missing_fields() {
        let config: Config = serde_json::from_str(r#"{ "background": [0, 0, 0] }"#).unwrap();

        assert_eq!(config.path, path::PathBuf::from("bvh.csv"));
        assert_eq!(config.background, [0.; 3]);
        assert_eq!(config.style, scene::LineStyle::default());
    }

    #[test]
    fn scene_keeps_only_populated_leaves() {
        let dir = tempfile::tempdir().unwrap();

        let path = write_table(&dir, "\
            0,0,0,1,1,1,0,5\n\
            0,0,0,1,1,1,3,5\n\
            0,0,0,1,1,1,0,0\n\
            1,0,0,0,1,1,0,2\n\
        ");

        let (scene, stats) = load_scene(&path, scene::LineStyle::default()).unwrap();

        assert_eq!(scene.edges().len(), 24);
        assert_eq!(stats.nodes, 4);
        assert_eq!(stats.non_empty, 2);
        assert_eq!(stats.inverted, 1);
    }

    #[test]
    fn missing_column_fails_load_stage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(Config::INPUT);

        fs::write(&path, "MinX,MinY,MinZ,MaxX,MaxY,MaxZ,ChildIndex\n0,0,0,1,1,1,0\n").unwrap();

        let err = run(Config { path, ..Default::default() }).unwrap_err();

        assert!(err.to_string().starts_with("load stage"));
        assert!(matches!(
            err.downcast_ref::<table::LoadError>(),
            Some(table::LoadError::MissingColumn { column: "TriangleCount" })
        ));
    }

    #[test]
    fn missing_file_fails_load_stage() {
        let dir = tempfile::tempdir().unwrap();

        let err = run(Config {
            path: dir.path().join(Config::INPUT),
            ..Default::default()
        }).unwrap_err();

        assert!(err.to_string().starts_with("load stage"));
        assert!(matches!(
            err.downcast_ref::<table::LoadError>(),
            Some(table::LoadError::NotFound { .. })
        ));
    }
}
