/// Read access to an interleaved 8-bit image stored row by row.
pub trait ImageView {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn channels(&self) -> usize;

    /// Bytes of row `y`: `width * channels` interleaved samples.
    fn row(&self, y: usize) -> &[u8];

    fn row_len(&self) -> usize {
        self.width() * self.channels()
    }

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { image: self, y: 0 }
    }

    fn pixel(&self, x: usize, y: usize) -> &[u8] {
        let c = self.channels();
        &self.row(y)[x * c..(x + 1) * c]
    }
}

pub trait ImageViewMut: ImageView {
    fn row_mut(&mut self, y: usize) -> &mut [u8];

    /// Visit rows top to bottom with mutable access.
    fn for_each_row_mut<F>(&mut self, mut f: F)
    where
        Self: Sized,
        F: FnMut(usize, &mut [u8]),
    {
        for y in 0..self.height() {
            f(y, self.row_mut(y));
        }
    }
}

pub struct Rows<'a, I: ?Sized + ImageView> {
    image: &'a I,
    y: usize,
}

impl<'a, I: ImageView> Iterator for Rows<'a, I> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.image.height() {
            return None;
        }
        let y = self.y;
        self.y += 1;
        Some(self.image.row(y))
    }
}
