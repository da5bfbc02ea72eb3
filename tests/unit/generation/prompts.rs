//! Tests for prompt matrix expansion and phrase rules

#[cfg(test)]
mod tests {
    use tilecraft::AssetError;
    use tilecraft::generation::prompts::{PromptAxis, PromptMatrix, PromptRule};

    // Tests the terrain matrix covers every combination
    // Verified by dropping the condition axis
    #[test]
    fn test_terrain_expansion() {
        let matrix = PromptMatrix::terrain();
        let jobs = matrix.expand().unwrap();

        assert_eq!(matrix.len(), 48);
        assert_eq!(jobs.len(), 48);
        assert_eq!(jobs[0].name, "spring_sunny_grass");
        assert_eq!(jobs[47].name, "winter_night_ocean");
        assert!(jobs[0].prompt.starts_with("Texture of grass during spring season while it is sunny."));
        assert!(jobs.iter().all(|job| !job.prompt.contains('{')));
    }

    // Tests creature prompts drop eyes on back views only
    // Verified by applying the rule to every view
    #[test]
    fn test_creature_back_view_rule() {
        let jobs = PromptMatrix::creature("red", "fox").expand().unwrap();
        assert_eq!(jobs.len(), 64);

        let back = jobs
            .iter()
            .find(|job| job.name == "running_back")
            .unwrap();
        assert!(!back.prompt.contains("angry green eyes"));
        assert!(back.prompt.contains("running red fox"));

        let side = jobs
            .iter()
            .find(|job| job.name == "running_side")
            .unwrap();
        assert!(side.prompt.contains("angry green eyes, "));
    }

    // Tests the first axis varies slowest
    // Verified by reversing the axis order
    #[test]
    fn test_expansion_order() {
        let matrix = PromptMatrix {
            template: "{a}-{b}".to_string(),
            axes: vec![PromptAxis::new("a", &["1", "2"]), PromptAxis::new("b", &["x", "y"])],
            rules: Vec::new(),
        };

        let prompts: Vec<String> = matrix
            .expand()
            .unwrap()
            .into_iter()
            .map(|job| job.prompt)
            .collect();
        assert_eq!(prompts, vec!["1-x", "1-y", "2-x", "2-y"]);
    }

    // Tests a matrix without axes yields the template once
    // Verified by returning no jobs
    #[test]
    fn test_no_axes() {
        let matrix = PromptMatrix {
            template: "a lone tree".to_string(),
            axes: Vec::new(),
            rules: vec![PromptRule {
                when: "tree".to_string(),
                remove: "lone ".to_string(),
            }],
        };

        let jobs = matrix.expand().unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].name, "");
        assert_eq!(jobs[0].prompt, "a tree");
    }

    // Tests empty and unnamed axes are rejected
    // Verified by expanding to zero jobs
    #[test]
    fn test_invalid_axes() {
        let empty = PromptMatrix {
            template: "{a}".to_string(),
            axes: vec![PromptAxis::new("a", &[])],
            rules: Vec::new(),
        };
        assert!(empty.is_empty());
        assert!(matches!(
            empty.expand(),
            Err(AssetError::InvalidParameter { .. })
        ));

        let unnamed = PromptMatrix {
            template: "x".to_string(),
            axes: vec![PromptAxis::new(" ", &["v"])],
            rules: Vec::new(),
        };
        assert!(unnamed.expand().is_err());
    }

    // Tests matrices deserialize from TOML with optional rules
    // Verified by requiring the rules table
    #[test]
    fn test_matrix_from_toml() {
        let matrix: PromptMatrix = toml::from_str(
            r#"
            template = "{colour} slime"

            [[axes]]
            name = "colour"
            values = ["green", "blue"]
            "#,
        )
        .unwrap();

        assert_eq!(matrix.len(), 2);
        assert!(matrix.rules.is_empty());
    }
}
