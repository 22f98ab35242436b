//! Tests for palette construction, catalog scanning and summary counts

#[cfg(test)]
mod tests {
    use crate::{write_png, write_solid_png};
    use image::{Rgba, RgbaImage};
    use mapart::MapArtError;
    use mapart::catalog::palette::{
        CatalogSummary, Palette, PaletteEntry, build_palette, list_candidates, scan_catalog,
    };
    use mapart::catalog::rules::CatalogRules;
    use std::fs;

    fn rules() -> CatalogRules {
        CatalogRules::new(["wool", "stone"], ["ore"], 16)
    }

    // Tests entries are sorted by name regardless of input order
    // Verified by removing the sort
    #[test]
    fn test_palette_sorted() {
        let palette = Palette::new(vec![
            PaletteEntry::new("white_wool", [230, 230, 230]),
            PaletteEntry::new("black_wool", [20, 20, 20]),
            PaletteEntry::new("gray_wool", [100, 100, 100]),
        ])
        .expect("palette should build");

        let names: Vec<&str> = palette.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["black_wool", "gray_wool", "white_wool"]);
        assert_eq!(palette.len(), 3);
        assert!(!palette.is_empty());
    }

    // Tests duplicate names keep the first supplied entry
    // Verified by deduplicating after reversing
    #[test]
    fn test_palette_deduplicates() {
        let palette = Palette::new(vec![
            PaletteEntry::new("stone", [1, 1, 1]),
            PaletteEntry::new("stone", [9, 9, 9]),
        ])
        .expect("palette should build");

        assert_eq!(palette.len(), 1);
        assert_eq!(palette.get("stone").map(|e| e.color), Some([1, 1, 1]));
    }

    // Tests the empty palette is rejected at construction
    // Verified by allowing empty entry lists
    #[test]
    fn test_palette_empty_error() {
        assert!(matches!(
            Palette::new(Vec::new()),
            Err(MapArtError::EmptyPalette { .. })
        ));
    }

    // Tests lookup by name
    // Verified by returning the neighbor of the search position
    #[test]
    fn test_palette_get() {
        let palette = Palette::new(vec![
            PaletteEntry::new("b", [2, 2, 2]),
            PaletteEntry::new("a", [1, 1, 1]),
        ])
        .expect("palette should build");

        assert_eq!(palette.get("b").map(|e| e.color), Some([2, 2, 2]));
        assert!(palette.get("c").is_none());
    }

    // Tests every exclusion category is counted and survivors sorted
    // Verified by aborting the scan on the corrupt file
    #[test]
    fn test_scan_catalog_counts_each_category() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = dir.path();

        write_solid_png(root, "white_wool", [230, 230, 230, 255], 16);
        write_solid_png(root, "black_wool", [20, 20, 20, 255], 16);
        write_solid_png(root, "stone_ore", [50, 50, 50, 255], 16);
        write_solid_png(root, "glass", [50, 50, 50, 255], 16);
        write_solid_png(root, "big_stone", [50, 50, 50, 255], 32);

        let mut translucent = RgbaImage::from_pixel(16, 16, Rgba([5, 5, 5, 255]));
        translucent.put_pixel(0, 0, Rgba([5, 5, 5, 200]));
        write_png(root, "gray_wool", &translucent);

        fs::write(root.join("red_wool.png"), b"broken").expect("write garbage");
        fs::write(root.join("notes.txt"), b"ignored").expect("write text");

        let scan = scan_catalog(root, &rules()).expect("scan should succeed");

        assert_eq!(
            scan.summary,
            CatalogSummary {
                accepted: 2,
                blacklisted: 1,
                not_whitelisted: 1,
                resolution: 1,
                transparency: 1,
                corrupted: 1,
            }
        );
        assert_eq!(scan.summary.total(), 7);
        assert_eq!(scan.summary.excluded(), 5);

        let palette = build_palette(root, &rules()).expect("palette should build");
        assert_eq!(
            palette.entries(),
            &[
                PaletteEntry::new("black_wool", [20, 20, 20]),
                PaletteEntry::new("white_wool", [230, 230, 230]),
            ]
        );
    }

    // Tests only png files are candidates
    // Verified by accepting any extension
    #[test]
    fn test_list_candidates_png_only() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        write_solid_png(dir.path(), "b_wool", [0, 0, 0, 255], 16);
        write_solid_png(dir.path(), "a_wool", [0, 0, 0, 255], 16);
        fs::write(dir.path().join("c_wool.jpg"), b"x").expect("write jpg");
        fs::create_dir(dir.path().join("d_wool.png")).expect("create dir");

        let files = list_candidates(dir.path()).expect("listing should succeed");
        let names: Vec<String> = files
            .iter()
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
            .collect();
        assert_eq!(names, vec!["a_wool.png", "b_wool.png"]);
    }

    // Tests empty catalogs fail with the scan summary attached
    // Verified by returning an empty palette instead
    #[test]
    fn test_build_palette_empty() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        write_solid_png(dir.path(), "stone_ore", [0, 0, 0, 255], 16);

        match build_palette(dir.path(), &rules()) {
            Err(MapArtError::EmptyPalette { summary }) => {
                assert_eq!(summary.blacklisted, 1);
                assert_eq!(summary.accepted, 0);
            }
            other => unreachable!("Expected EmptyPalette, got {other:?}"),
        }
    }

    // Tests a missing directory is a file system error
    // Verified by treating a missing directory as empty
    #[test]
    fn test_build_palette_missing_dir() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let result = build_palette(&dir.path().join("absent"), &rules());
        assert!(matches!(result, Err(MapArtError::FileSystem { .. })));
    }

    // Tests summary display lists every category
    // Verified by omitting the corrupted count
    #[test]
    fn test_summary_display() {
        let summary = CatalogSummary {
            accepted: 1,
            corrupted: 4,
            ..CatalogSummary::default()
        };
        let text = summary.to_string();
        assert!(text.contains("1 accepted"));
        assert!(text.contains("4 corrupted"));
    }
}
