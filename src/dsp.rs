/*
 * // Copyright (c) Radzivon Bartoshyk 10/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */

use crate::accel::{AcceleratorFault, BankAccelerator};

/// Bank size of the EdkDSP vector unit, in single precision words.
pub const EDKDSP_BANK_SIZE: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Memory {
    A,
    B,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VectorOp {
    /// `Z = A + B`
    VAdd,
    /// `B = A * Z`
    VMultAz2b,
    /// `B = Z`
    VZ2b,
}

/// Address generator of one operand: bank, first word and increment.
#[derive(Debug, Clone, Copy)]
struct Port {
    bank: usize,
    offset: usize,
    inc: usize,
}

impl Port {
    const fn new(bank: usize, offset: usize, inc: usize) -> Self {
        Self { bank, offset, inc }
    }

    fn address(&self, k: usize) -> usize {
        self.offset + k * self.inc
    }
}

/// Local memories of the data flow unit: three memories, two banks each.
///
/// Small enough to live on the stack for the EdkDSP bank size.
struct DataFlowUnit<const BANK: usize> {
    a: [[f32; BANK]; 2],
    b: [[f32; BANK]; 2],
    z: [[f32; BANK]; 2],
}

impl<const BANK: usize> DataFlowUnit<BANK> {
    fn new() -> Self {
        Self {
            a: [[0.; BANK]; 2],
            b: [[0.; BANK]; 2],
            z: [[0.; BANK]; 2],
        }
    }

    fn bank_mut(&mut self, memory: Memory, bank: usize) -> &mut [f32; BANK] {
        match memory {
            Memory::A => &mut self.a[bank],
            Memory::B => &mut self.b[bank],
        }
    }

    fn load(&mut self, memory: Memory, bank: usize, src: &[f32]) -> Result<(), AcceleratorFault> {
        if src.len() > BANK {
            return Err(AcceleratorFault::BankOverflow(src.len(), BANK));
        }
        self.bank_mut(memory, bank)[..src.len()].copy_from_slice(src);
        Ok(())
    }

    fn store(
        &mut self,
        memory: Memory,
        bank: usize,
        dst: &mut [f32],
    ) -> Result<(), AcceleratorFault> {
        if dst.len() > BANK {
            return Err(AcceleratorFault::BankOverflow(dst.len(), BANK));
        }
        dst.copy_from_slice(&self.bank_mut(memory, bank)[..dst.len()]);
        Ok(())
    }

    fn check_port(port: Port, count: usize) -> Result<(), AcceleratorFault> {
        if port.bank > 1 {
            return Err(AcceleratorFault::Device(format!(
                "Bank {} does not exist",
                port.bank
            )));
        }
        if count > 0 && port.address(count - 1) >= BANK {
            return Err(AcceleratorFault::BankOverflow(port.address(count - 1) + 1, BANK));
        }
        Ok(())
    }

    fn execute(
        &mut self,
        op: VectorOp,
        a: Port,
        b: Port,
        z: Port,
        count: usize,
    ) -> Result<(), AcceleratorFault> {
        Self::check_port(a, count)?;
        Self::check_port(b, count)?;
        Self::check_port(z, count)?;
        for k in 0..count {
            let (ia, ib, iz) = (a.address(k), b.address(k), z.address(k));
            match op {
                VectorOp::VAdd => {
                    self.z[z.bank][iz] = self.a[a.bank][ia] + self.b[b.bank][ib];
                }
                VectorOp::VMultAz2b => {
                    self.b[b.bank][ib] = self.a[a.bank][ia] * self.z[z.bank][iz];
                }
                VectorOp::VZ2b => {
                    self.b[b.bank][ib] = self.z[z.bank][iz];
                }
            }
        }
        Ok(())
    }
}

/// Software model of the EdkDSP vector co-processor running the lifting firmware.
///
/// Each call stages the block in memories A and B, places `alpha` in bank 1 of A
/// and runs four vector operations:
/// `Z = A + B` over the even neighbours, `B = alpha * Z`, `Z = A + B` onto the odd
/// samples and finally `B = Z` before reading the block back.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmulatedDsp<const BANK: usize = EDKDSP_BANK_SIZE>;

impl<const BANK: usize> BankAccelerator for EmulatedDsp<BANK> {
    fn bank_capacity(&self) -> usize {
        BANK
    }

    fn lift_block(&self, block: &mut [f32], alpha: f32) -> Result<(), AcceleratorFault> {
        let len = block.len();
        if len % 2 == 0 {
            return Err(AcceleratorFault::EvenLength(len));
        }
        if len > BANK {
            return Err(AcceleratorFault::BankOverflow(len, BANK));
        }
        let steps = (len - 1) / 2;

        let mut unit = DataFlowUnit::<BANK>::new();
        unit.load(Memory::A, 0, block)?;
        unit.load(Memory::B, 0, block)?;
        unit.load(Memory::A, 1, &[alpha])?;

        unit.execute(
            VectorOp::VAdd,
            Port::new(0, 0, 2),
            Port::new(0, 2, 2),
            Port::new(0, 1, 2),
            steps,
        )?;
        unit.execute(
            VectorOp::VMultAz2b,
            Port::new(1, 0, 0),
            Port::new(1, 1, 2),
            Port::new(0, 1, 2),
            steps,
        )?;
        unit.execute(
            VectorOp::VAdd,
            Port::new(0, 1, 2),
            Port::new(1, 1, 2),
            Port::new(0, 1, 2),
            steps,
        )?;
        unit.execute(
            VectorOp::VZ2b,
            Port::new(0, 0, 0),
            Port::new(0, 1, 2),
            Port::new(0, 1, 2),
            steps,
        )?;

        unit.store(Memory::B, 0, block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_lift() {
        let dsp = EmulatedDsp::<8>;
        let mut block = [1f32, 2., 3., 4., 5.];
        dsp.lift_block(&mut block, 0.5).unwrap();
        assert_eq!(block, [1., 4., 3., 8., 5.]);

        let mut single = [2f32];
        dsp.lift_block(&mut single, 0.5).unwrap();
        assert_eq!(single, [2.]);
    }

    #[test]
    fn test_block_faults() {
        let dsp = EmulatedDsp::<4>;
        let mut even = [0f32; 4];
        assert_eq!(
            dsp.lift_block(&mut even, 1.),
            Err(AcceleratorFault::EvenLength(4))
        );
        let mut long = [0f32; 5];
        assert_eq!(
            dsp.lift_block(&mut long, 1.),
            Err(AcceleratorFault::BankOverflow(5, 4))
        );
    }

    #[test]
    fn test_default_bank() {
        assert_eq!(EmulatedDsp::<EDKDSP_BANK_SIZE>.bank_capacity(), 256);
        let dsp: EmulatedDsp = EmulatedDsp;
        let mut block = vec![1f32; 255];
        dsp.lift_block(&mut block, -1.).unwrap();
        assert!(block.iter().step_by(2).all(|&v| v == 1.));
        assert!(block.iter().skip(1).step_by(2).all(|&v| v == -1.));
    }

    #[test]
    fn test_unit_is_stack_sized() {
        assert_eq!(
            std::mem::size_of::<DataFlowUnit<EDKDSP_BANK_SIZE>>(),
            6 * EDKDSP_BANK_SIZE * std::mem::size_of::<f32>()
        );
    }

    #[test]
    fn test_blocks_do_not_share_state() {
        let dsp = EmulatedDsp::<16>;
        let mut first = [5f32; 15];
        dsp.lift_block(&mut first, 2.).unwrap();
        let mut second = [1f32, 0., 1.];
        dsp.lift_block(&mut second, 0.25).unwrap();
        assert_eq!(second, [1., 0.5, 1.]);
        assert!(first.iter().skip(1).step_by(2).all(|&v| v == 25.));
    }
}
