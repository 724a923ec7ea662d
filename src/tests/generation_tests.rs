//! Batch and lazy generation tests

#[cfg(test)]
mod tests {
    use crate::tests::test_utils::{assert_strictly_increasing, examine, test_time, IdStats};
    use crate::{GeneratorConfig, GeneratorError};

    #[test]
    fn test_expected_count_4_4_10() {
        let config = GeneratorConfig::new(test_time(), 4, 4, 10).unwrap();
        let ids = config.generate().unwrap();
        assert_eq!(ids.len() as u64, config.count());
        assert_eq!(
            examine(ids),
            IdStats {
                total: 160,
                machines: 4,
                processes: 4,
                counters: 10,
                timestamps: 1,
            }
        );
    }

    #[test]
    fn test_expected_count_4_0_10() {
        let config = GeneratorConfig::new(test_time(), 4, 0, 10).unwrap();
        assert_eq!(config.count(), 0);
        assert_eq!(examine(config.generate().unwrap()), IdStats::default());
        assert_eq!(examine(config.ids().unwrap()), IdStats::default());
    }

    #[test]
    fn test_expected_count_1_1_500() {
        let config = GeneratorConfig::new(test_time(), 1, 1, 500).unwrap();
        assert_eq!(
            examine(config.generate().unwrap()),
            IdStats {
                total: 500,
                machines: 1,
                processes: 1,
                counters: 500,
                timestamps: 1,
            }
        );
    }

    #[test]
    fn test_invalid_config_generates_nothing() {
        let config = GeneratorConfig::builder()
            .timestamp(test_time())
            .machines(1 << 25)
            .processes_per_machine(1)
            .items_per_process(2)
            .build();
        assert!(matches!(
            config.generate(),
            Err(GeneratorError::MachineCountTooLarge { .. })
        ));
        assert!(config.ids().is_err());

        let config = GeneratorConfig::builder().items_per_process(1 << 25).build();
        assert!(matches!(
            config.generate(),
            Err(GeneratorError::ItemCountTooLarge { .. })
        ));
    }

    #[test]
    fn test_nested_order() {
        let config = GeneratorConfig::new(test_time(), 3, 2, 4).unwrap();
        let ids = config.generate().unwrap();

        let mut expected = Vec::new();
        for machine in 0..3u32 {
            for process in 0..2u16 {
                for counter in 0..4u32 {
                    expected.push(crate::encode(1_257_894_000, machine, process, counter));
                }
            }
        }
        assert_eq!(ids, expected);
        assert_strictly_increasing(&ids);
    }

    #[test]
    fn test_batch_matches_lazy() {
        let config = GeneratorConfig::new(test_time(), 5, 3, 7).unwrap();
        let lazy: Vec<_> = config.ids().unwrap().collect();
        assert_eq!(config.generate().unwrap(), lazy);
    }

    #[test]
    fn test_fields_recovered() {
        let config = GeneratorConfig::new(test_time(), 2, 3, 4).unwrap();
        for (i, id) in config.generate().unwrap().into_iter().enumerate() {
            let i = i as u32;
            assert_eq!(id.timestamp(), test_time());
            assert_eq!(id.machine(), i / 12);
            assert_eq!(u32::from(id.process()), (i / 4) % 3);
            assert_eq!(id.counter(), i % 4);
        }
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn test_batch_too_large() {
        let config = GeneratorConfig::new(test_time(), 1 << 24, 1, 1 << 24).unwrap();
        assert_eq!(
            config.generate(),
            Err(GeneratorError::BatchTooLarge { count: 1 << 48 })
        );
        // Lazy enumeration still works for such spaces
        assert!(config.ids().unwrap().next().is_some());
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_batch_too_large() {
        let config = GeneratorConfig::new(test_time(), 1 << 24, u16::MAX, 1 << 24).unwrap();
        let count = config.count();
        assert_eq!(config.generate(), Err(GeneratorError::BatchTooLarge { count }));
        assert!(config.ids().unwrap().next().is_some());
    }
}
