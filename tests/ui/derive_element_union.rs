use eqset::Element;

#[derive(Element)]
union Bits {
    integer: u32,
    float: f32,
}

fn main() {}
