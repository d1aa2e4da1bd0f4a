use std::io::{self, Write};

use array_list::collections::contiguous::{ArrayList, OutputError};

fn print_int<W: Write>(out: &mut W, index: usize, element: &[u8]) -> io::Result<()> {
    let mut bytes = [0; size_of::<i32>()];
    bytes.copy_from_slice(element);
    writeln!(out, "{index}. {}", i32::from_ne_bytes(bytes))
}

fn main() -> Result<(), OutputError> {
    let mut list = ArrayList::create(3, size_of::<i32>())?;
    println!("{list:?}");

    for value in [10_i32, 20, 30, 40, 50, 60] {
        list.append(&value.to_ne_bytes())?;
        println!("{list:?}");
    }

    list.set(2, &25_i32.to_ne_bytes())?;
    list.insert(2, &20_i32.to_ne_bytes())?;

    let stdout = io::stdout();
    list.output(&mut stdout.lock(), print_int)?;

    println!("Size of ArrayList is {}", list.len());
    println!("Capacity of ArrayList is {}", list.cap());

    list.destroy()?;
    Ok(())
}
