#![no_main]

use libfuzzer_sys::fuzz_target;
use tinyz80::Memory;

fuzz_target!(|ops: Vec<(u8, u16, u8)>| {
    let mut memory = Memory::new(0x1000);

    for (op_type, addr, val) in ops {
        match op_type % 3 {
            0 => {
                let _ = memory.read(addr);
            }
            1 => {
                let _ = memory.write(addr, val);
            }
            2 => {
                let _ = memory.load(addr, &[val, val, val]);
            }
            _ => unreachable!(),
        }
    }
});
