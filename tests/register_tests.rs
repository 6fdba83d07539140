use gameboy_cartridge::error::Error;
use gameboy_cartridge::mmu::{Memory, MemoryMut, Ram, Rom};
use gameboy_cartridge::register::Register;

// Flag register layout used by the Game Boy CPU, bit positions in byte 0.
const FLAG_Z: u8 = 7;
const FLAG_N: u8 = 6;
const FLAG_H: u8 = 5;
const FLAG_C: u8 = 4;

#[test]
fn test_flags_as_bits() {
    let mut af = Register::new();
    af.write(1, 0x01).unwrap(); // A

    af.set_bit(0, FLAG_Z, true).unwrap();
    af.set_bit(0, FLAG_C, true).unwrap();

    assert_eq!(af.read(0), Ok(0b1001_0000));
    assert_eq!(af.get_bit(0, FLAG_N), Ok(false));
    assert_eq!(af.get_bit(0, FLAG_H), Ok(false));
    assert_eq!(af.value(), 0x0190);

    af.set_bit(0, FLAG_Z, false).unwrap();
    assert_eq!(af.read(0), Ok(0b0001_0000));
    assert_eq!(af.read(1), Ok(0x01), "A must not be touched by flag updates");
}

#[test]
fn test_register_bounds() {
    let mut reg = Register::new();
    assert!(matches!(reg.read(2), Err(Error::OutOfRange(_))));
    assert!(matches!(reg.write(2, 0xFF), Err(Error::OutOfRange(_))));
    assert!(matches!(reg.get_bit(2, 0), Err(Error::OutOfRange(_))));
    assert!(matches!(reg.set_bit(0, 8, true), Err(Error::OutOfRange(_))));
    assert_eq!(reg.memory(), &[0, 0]);
}

#[test]
fn test_memory_capabilities() {
    let mut ram = Ram::new(vec![0; 8]);
    ram.write(7, 0x7F).unwrap();
    assert!(ram.editable());

    let rom: Rom = ram.into_rom();
    assert!(!rom.editable());
    assert_eq!(rom.len(), 8);
    assert_eq!(rom.read(7), Ok(0x7F));
    assert!(rom.read(8).is_err());
}

#[test]
fn test_memory_through_trait_object() {
    let stores: Vec<Box<dyn Memory>> = vec![
        Box::new(Rom::new(vec![1, 2, 3])),
        Box::new(Ram::new(vec![1, 2, 3])),
    ];
    for store in &stores {
        assert_eq!(store.memory(), &[1, 2, 3]);
        assert_eq!(store.read_u16(1), Ok(0x0302));
        assert!(store.read(3).is_err());
    }
}
