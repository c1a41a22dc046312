//! Huffman encoder (compression).

use crate::error::Result;
use crate::table::{CodeTable, Codeword};
use huffcodec_core::MsbBitWriter;
use tracing::trace;

/// Encoder writing messages through a trained code table.
#[derive(Debug, Clone, Copy)]
pub struct HuffmanEncoder<'a> {
    table: &'a CodeTable,
}

impl<'a> HuffmanEncoder<'a> {
    /// Create an encoder over `table`.
    pub fn new(table: &'a CodeTable) -> Self {
        Self { table }
    }

    /// Encode `message`.
    ///
    /// # Format
    ///
    /// 1. The codeword of each message character, in order
    /// 2. The sentinel codeword
    /// 3. Zero bits up to the next byte boundary
    ///
    /// Bits are packed MSB-first. There is no length header; the sentinel
    /// alone marks the end of the payload.
    ///
    /// # Errors
    ///
    /// `UnknownSymbol` if a character is missing from the table and
    /// `ReservedSymbol` if the message contains the sentinel. Nothing is
    /// returned on failure.
    pub fn encode(&self, message: &str) -> Result<Vec<u8>> {
        let mut writer = MsbBitWriter::with_capacity(message.len() / 2 + 1);

        for (position, symbol) in message.chars().enumerate() {
            let code = self.table.lookup(symbol, position)?;
            write_code(&mut writer, code);
        }
        write_code(&mut writer, self.table.sentinel_code());

        let payload_bits = writer.bits_written();
        let padding = writer.padding_bits();
        let output = writer.into_vec();
        trace!(
            input_bytes = message.len(),
            payload_bits,
            padding,
            output_bytes = output.len(),
            "encoded message"
        );
        Ok(output)
    }
}

fn write_code(writer: &mut MsbBitWriter, code: &Codeword) {
    for &bit in code.bits() {
        writer.write_bit(bit);
    }
}
