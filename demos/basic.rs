//! Declares wire layouts for a pair of host types and hex-dumps the
//! resulting encoding.

use flatwire::{serialize_into, SerializeOptions};

struct Inner {
    a: u8,
    b: [i32; 3],
}

flatwire::serializable_fields!(Inner => a, b);

struct Outer {
    a: u32,
    b: u32,
    c: Inner,
    d: u32,
    e: [u8; 2],
    f: Vec<u8>,
}

// The wire order is what the macro says, not what the struct says.
flatwire::serializable_fields!(Outer => a, b, d, c, e, f);

fn main() {
    let value = Outer {
        a: 0xAABBCCDD,
        b: 0x11223344,
        c: Inner {
            a: 1,
            b: [2, 3, 4],
        },
        d: 0x8888_7777,
        e: [1, 2],
        f: vec![4, 5, 6, 7],
    };

    let mut buf = [0u8; 400];
    let opts = SerializeOptions::new().little_endian();
    let encoded = serialize_into(&value, &mut buf, opts).unwrap();

    println!("{} bytes:", encoded.len());
    for chunk in encoded.chunks(16) {
        for byte in chunk {
            print!("{:02x} ", byte);
        }
        println!();
    }
}
