//! Tests for the generator contract

#[cfg(test)]
mod tests {
    use image::{DynamicImage, RgbImage};
    use tilecraft::generation::request::{GenerationRequest, GeneratorError, ImageGenerator};

    fn request() -> GenerationRequest {
        GenerationRequest {
            prompt: "Texture of grass".to_string(),
            seed: 43,
            steps: 2,
            guidance_scale: 0.0,
            width: 8,
            height: 6,
            seamless: true,
        }
    }

    struct Blank {
        calls: usize,
    }

    impl ImageGenerator for Blank {
        fn generate(&mut self, request: &GenerationRequest) -> Result<DynamicImage, GeneratorError> {
            self.calls += 1;
            Ok(DynamicImage::ImageRgb8(RgbImage::new(request.width, request.height)))
        }
    }

    // Tests a struct implementation receives the request
    // Verified by ignoring the requested size
    #[test]
    fn test_struct_generator() {
        let mut generator = Blank { calls: 0 };
        let image = generator.generate(&request()).unwrap();

        assert_eq!((image.width(), image.height()), (8, 6));
        assert_eq!(generator.calls, 1);
    }

    // Tests closures act as generators
    // Verified by removing the blanket implementation
    #[test]
    fn test_closure_generator() {
        let mut seen = Vec::new();
        let mut generator = |request: &GenerationRequest| -> Result<DynamicImage, GeneratorError> {
            seen.push(request.seed);
            Err("model not loaded".into())
        };

        let error = generator.generate(&request()).unwrap_err();
        assert_eq!(error.to_string(), "model not loaded");
        assert_eq!(seen, vec![43]);
    }
}
