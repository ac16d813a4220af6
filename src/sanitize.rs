/*
MIT License
Copyright (c)  Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

/// Turns a name into something that can be used within an EMS
/// identifier, replacing spaces, colons and hyphens by underscores.
///
/// Different names can end up being the same identifier (e.g., `A B` and
/// `A-B`), so callers must check for collisions.
///
/// ```
/// use apmv::sanitize;
///
/// assert_eq!(sanitize("Block1:Zone1 People"), "Block1_Zone1_People");
/// assert_eq!(sanitize("South-West office"), "South_West_office");
/// assert_eq!(sanitize("Office"), "Office");
/// ```
pub fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            ' ' | ':' | '-' => '_',
            _ => c,
        })
        .collect()
}

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn test_collisions_are_possible() {
        assert_eq!(sanitize("A B"), sanitize("A-B"));
        assert_eq!(sanitize("A B"), sanitize("A_B"));
    }

    #[test]
    fn test_keeps_everything_else() {
        assert_eq!(sanitize("Zoné 1.2/b"), "Zoné_1.2/b");
        assert_eq!(sanitize(""), "");
    }
}
