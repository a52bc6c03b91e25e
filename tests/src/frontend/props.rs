//! Property tests for the extension-policy and effective-address
//! contracts, driven through translation + evaluation.

use ppcjit_frontend::ppc::cpu::PpcCpu;
use proptest::prelude::*;

use super::{guest_mem, lbz, lha, lwzu, run};

proptest! {
    #[test]
    fn lbz_zero_extends_any_byte(
        b in any::<u8>(),
        base in 0x100u64..0x4000,
    ) {
        let mut cpu = PpcCpu::new();
        let mut mem = guest_mem();
        cpu.gpr[1] = base;
        mem.write_be(base + 4, 1, b as u64).unwrap();
        run(&mut cpu, &mut mem, &[lbz(3, 1, 4)]);
        prop_assert_eq!(cpu.gpr[3], b as u64);
    }

    #[test]
    fn lha_replicates_the_sign_bit(h in any::<u16>()) {
        let mut cpu = PpcCpu::new();
        let mut mem = guest_mem();
        cpu.gpr[1] = 0x2000;
        mem.write_be(0x2004, 2, h as u64).unwrap();
        run(&mut cpu, &mut mem, &[lha(3, 1, 4)]);
        prop_assert_eq!(cpu.gpr[3], h as i16 as i64 as u64);
    }

    #[test]
    fn base_field_zero_ignores_r0_contents(
        r0 in any::<u64>(),
        d in 1i32..0x1000,
    ) {
        let mut cpu = PpcCpu::new();
        let mut mem = guest_mem();
        cpu.gpr[0] = r0;
        mem.write_be(d as u64, 1, 0x3c).unwrap();
        run(&mut cpu, &mut mem, &[lbz(3, 0, d)]);
        prop_assert_eq!(cpu.gpr[3], 0x3c);
    }

    #[test]
    fn update_form_accesses_old_base_then_writes_ea(
        base in 0x100u64..0x4000,
        d in 0i32..0x400,
    ) {
        let mut cpu = PpcCpu::new();
        let mut mem = guest_mem();
        cpu.gpr[1] = base;
        let ea = base + d as u64;
        mem.write_be(ea, 4, 0x0102_0304).unwrap();
        run(&mut cpu, &mut mem, &[lwzu(3, 1, d)]);
        prop_assert_eq!(cpu.gpr[3], 0x0102_0304);
        prop_assert_eq!(cpu.gpr[1], ea);
    }
}
