//! Field boundary and round-trip tests

#[cfg(test)]
mod tests {
    use rand::Rng;

    use crate::tests::test_utils::test_time;
    use crate::{encode, GeneratorConfig, ObjectId, MAX_ITEMS_PER_PROCESS, MAX_MACHINES};

    #[test]
    fn test_random_components_round_trip() {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let timestamp: u32 = rng.random();
            let machine = rng.random_range(0..MAX_MACHINES);
            let process: u16 = rng.random();
            let counter = rng.random_range(0..MAX_ITEMS_PER_PROCESS);

            let id = encode(timestamp, machine, process, counter);
            assert_eq!(id.decompose(), (timestamp, machine, process, counter));
            assert_eq!(id.to_hex().parse::<ObjectId>().unwrap(), id);
        }
    }

    #[test]
    fn test_random_high_bits_discarded() {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let machine: u32 = rng.random();
            let counter: u32 = rng.random();
            let id = encode(0, machine, 0, counter);
            assert_eq!(id.machine(), machine & 0x00ff_ffff);
            assert_eq!(id.counter(), counter & 0x00ff_ffff);
        }
    }

    #[test]
    fn test_largest_machine_index() {
        let config = GeneratorConfig::new(test_time(), MAX_MACHINES, 1, 1).unwrap();
        let last = config.ids().unwrap().last().unwrap();
        assert_eq!(last.machine(), MAX_MACHINES - 1);
        assert_eq!(&last.as_bytes()[4..7], &[0xff, 0xff, 0xff]);
    }

    #[test]
    fn test_largest_counter_index() {
        let config = GeneratorConfig::new(test_time(), 1, 1, MAX_ITEMS_PER_PROCESS).unwrap();
        let mut ids = config.ids().unwrap();
        assert_eq!(ids.remaining(), u64::from(MAX_ITEMS_PER_PROCESS));
        let last = ids.by_ref().last().unwrap();
        assert_eq!(last.counter(), MAX_ITEMS_PER_PROCESS - 1);
        assert_eq!(&last.as_bytes()[9..12], &[0xff, 0xff, 0xff]);
    }

    #[test]
    fn test_pre_epoch_timestamp_wraps() {
        let t = chrono::DateTime::from_timestamp(-1, 0).unwrap();
        let config = GeneratorConfig::new(t, 1, 1, 1).unwrap();
        let id = config.generate().unwrap()[0];
        assert_eq!(id.timestamp_secs(), u32::MAX);
    }
}
