/// Receives the edit script derived from a list of matching blocks.
///
/// [`emit_opcodes`](crate::algorithms::emit_opcodes) walks the matching
/// blocks and calls exactly one method per opcode, in order, followed by
/// a single call to [`finish`](DiffHook::finish).  The hook only sees
/// indexes, never the elements themselves.
pub trait DiffHook: Sized {
    /// The error produced from the hook methods.
    type Error;

    /// `a[old_index..old_index + len]` equals `b[new_index..new_index + len]`.
    fn equal(&mut self, old_index: usize, new_index: usize, len: usize) -> Result<(), Self::Error> {
        let _ = (old_index, new_index, len);
        Ok(())
    }

    /// `a[old_index..old_index + old_len]` has no counterpart in `b`.  The
    /// gap sits right before `b[new_index]`.
    fn delete(
        &mut self,
        old_index: usize,
        old_len: usize,
        new_index: usize,
    ) -> Result<(), Self::Error> {
        let _ = (old_index, old_len, new_index);
        Ok(())
    }

    /// `b[new_index..new_index + new_len]` has no counterpart in `a`.  The
    /// gap sits right before `a[old_index]`.
    fn insert(
        &mut self,
        old_index: usize,
        new_index: usize,
        new_len: usize,
    ) -> Result<(), Self::Error> {
        let _ = (old_index, new_index, new_len);
        Ok(())
    }

    /// Both sequences have a gap between the same two matching blocks.
    ///
    /// The default implementation reports a deletion followed by an
    /// insertion.
    fn replace(
        &mut self,
        old_index: usize,
        old_len: usize,
        new_index: usize,
        new_len: usize,
    ) -> Result<(), Self::Error> {
        self.delete(old_index, old_len, new_index)?;
        self.insert(old_index + old_len, new_index, new_len)
    }

    /// Called once after the last opcode.
    fn finish(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<'a, D: DiffHook + 'a> DiffHook for &'a mut D {
    type Error = D::Error;

    fn equal(&mut self, old_index: usize, new_index: usize, len: usize) -> Result<(), Self::Error> {
        (*self).equal(old_index, new_index, len)
    }

    fn delete(
        &mut self,
        old_index: usize,
        old_len: usize,
        new_index: usize,
    ) -> Result<(), Self::Error> {
        (*self).delete(old_index, old_len, new_index)
    }

    fn insert(
        &mut self,
        old_index: usize,
        new_index: usize,
        new_len: usize,
    ) -> Result<(), Self::Error> {
        (*self).insert(old_index, new_index, new_len)
    }

    fn replace(
        &mut self,
        old_index: usize,
        old_len: usize,
        new_index: usize,
        new_len: usize,
    ) -> Result<(), Self::Error> {
        (*self).replace(old_index, old_len, new_index, new_len)
    }

    fn finish(&mut self) -> Result<(), Self::Error> {
        (*self).finish()
    }
}
