//! Encodes a measurement frame for a fixed big-endian wire protocol,
//! sizing the buffer from the measured length first.

use flatwire::{
    serialize_into, InsufficientSpace, Serialize, SerializeOptions,
};

struct SensorFrame {
    station: u16,
    flags: u8,
    readings: Vec<f32>,
    checksum: u32,
}

flatwire::serializable_fields!(
    SensorFrame => station, flags, readings, checksum
);

fn main() -> Result<(), InsufficientSpace> {
    let frame = SensorFrame {
        station: 0x0117,
        flags: 0b0000_0101,
        readings: vec![21.5, 21.7, 22.1, 21.9],
        checksum: 0xCAFEBABE,
    };

    let mut buf = vec![0u8; frame.serialized_len()];
    let opts = SerializeOptions::new().big_endian();
    let encoded = serialize_into(&frame, &mut buf, opts)?;

    println!("frame is {} bytes on the wire", encoded.len());

    // A buffer one byte short is rejected without being touched.
    let mut short = vec![0u8; frame.serialized_len() - 1];
    assert_eq!(
        serialize_into(&frame, &mut short, opts),
        Err(InsufficientSpace)
    );
    assert!(short.iter().all(|&b| b == 0));

    Ok(())
}
