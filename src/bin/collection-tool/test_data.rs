#[cfg(test)]
pub const POST_FRONT_MATTER: &str = r##"---
title: "This is a \"title\""
titleHtml: "This is a \"title\""
subtitle: "Replace with subtitle"
category: "Uncategorized"
date: 2024-02-27
readTime: "5 min"
thumbnail:
  src: "./thumbnail.jpg"
  alt: "Replace with thumbnail description"
heroImage:
  src: "./hero.jpg"
  alt: "Replace with hero image description"
  caption: "Replace with hero image caption"
tags: []
author:
  name: "Thiago"
  initial: "T"
  bio: "Replace with author bio"
---

"##;
