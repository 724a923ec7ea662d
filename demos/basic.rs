use chrono::{TimeZone, Utc};
use objectid_space::{GeneratorConfig, GeneratorError, ObjectId};

fn main() -> Result<(), GeneratorError> {
    let t = Utc.with_ymd_and_hms(2009, 11, 10, 23, 0, 0).unwrap();

    // 2 machines, 2 processes each, 3 counter values per process
    let config = GeneratorConfig::new(t, 2, 2, 3)?;
    println!("Space holds {} ObjectIds", config.count());

    println!("\nBatch (counter varies fastest):");
    for id in config.generate()? {
        print_id(id);
    }

    println!("\nStreamed from a producer thread:");
    let mut stream = config.stream_with_capacity(4)?;
    for id in stream.by_ref().take(3) {
        print_id(id);
    }
    println!("  ... producer sent {} before we stopped", stream.join());

    // Out-of-range configs are rejected before anything is produced
    if let Err(e) = GeneratorConfig::new(t, 1 << 25, 1, 2) {
        println!("\nRejected: {e}");
    }
    Ok(())
}

fn print_id(id: ObjectId) {
    let (_, machine, process, counter) = id.decompose();
    println!(
        "  ID: {id}, Human date: {}, Machine: {machine}, Process: {process}, Counter: {counter}",
        id.timestamp()
    );
}
