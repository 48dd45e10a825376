#[cfg(test)]
pub const POST_DATA_MD: &str = "# Learning Rust the slow way

I picked up [Rust](https://www.rust-lang.org) last year and decided to learn it the *slow* way.

![crab](crab.png)

## Why

Three things kept me going:

- ownership
- pattern matching
- cargo

```rust
fn main() {}
```

That is all for now.";

#[cfg(test)]
pub const POST_DATA_HTML: &str = r#"<h1>Deploying a blog</h1>
<p>The first paragraph is short.</p>
<p><img src="/images/deploy.png" alt="deploy" /></p>
<ul>
<li>
<p>Nested <em>list</em> paragraph.</p>
</li>
</ul>
<p>The last one.</p>"#;
