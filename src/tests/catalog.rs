#[cfg(test)]
mod tests {
    use std::{env, fs};

    use crate::catalog::{
        error::CatalogError,
        loader,
        models::{Catalog, GameRecord},
    };

    fn record(title: &str) -> GameRecord {
        GameRecord {
            title: title.to_string(),
            genre: "arcade".to_string(),
            description: format!("Cryptic hint for {}", title),
        }
    }

    #[test]
    fn rejects_duplicate_titles() {
        let result = Catalog::from_records(vec![record("Pong"), record("Pong")]);
        assert!(matches!(result, Err(CatalogError::DuplicateTitle(_))));
    }

    #[test]
    fn rejects_empty_catalog() {
        let result = Catalog::from_records(vec![]);
        assert!(matches!(result, Err(CatalogError::Empty)));
    }

    #[test]
    fn loads_catalog_from_json() {
        let path = env::temp_dir().join("weakest-hint-catalog-test.json");
        fs::write(
            &path,
            r#"[{"title": "Pong", "genre": "arcade", "description": "Two lines chasing one ball"}]"#,
        )
        .unwrap();

        let catalog = loader::load_catalog(path.to_str().unwrap()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.games()[0].title, "Pong");

        fs::remove_file(path).ok();
    }

    #[test]
    fn missing_catalog_file_is_an_error() {
        let result = loader::load_catalog("data/does-not-exist.json");
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }

    #[test]
    fn shipped_catalog_fills_a_full_quiz() {
        let catalog = loader::load_catalog("data/catalog.json").unwrap();
        assert!(catalog.len() >= 5);
    }
}
