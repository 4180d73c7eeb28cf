#[cfg(test)]
pub const POST_DATA_YAML: &str = r##"---
title: How to write a Code Review
titleHtml: How to write a <em>Code Review</em>
subtitle: There is always those quite obvious things such as don't be a jerk
category: Engineering
date: 2020-05-22
readTime: 5 min
thumbnail:
  src: ./review-thumb.jpg
  alt: A pull request with comments
heroImage:
  src: ./review-hero.jpg
  alt: Two people looking at a screen
  caption: Reviews are conversations
tags:
  - engineering
  - code-review
author:
  name: Thiago
  initial: T
  bio: Software engineer for more than 20 years
---

# How to write a Code Review

There is always those quite obvious things such as don't be a jerk. Those are not the ones I will be talking now.

<!-- more -->

## Be nice
"##;

#[cfg(test)]
pub const POST_DATA_TOML: &str = r##"+++
title = "How to write a Code Review"
titleHtml = "How to write a <em>Code Review</em>"
subtitle = "There is always those quite obvious things such as don't be a jerk"
category = "Engineering"
date = 2020-05-22
readTime = "5 min"
tags = ["engineering", "code-review"]

[thumbnail]
src = "./review-thumb.jpg"
alt = "A pull request with comments"

[heroImage]
src = "./review-hero.jpg"
alt = "Two people looking at a screen"
caption = "Reviews are conversations"

[author]
name = "Thiago"
initial = "T"
bio = "Software engineer for more than 20 years"
+++

# How to write a Code Review

There is always those quite obvious things such as don't be a jerk. Those are not the ones I will be talking now.

<!-- more -->

## Be nice
"##;

#[cfg(test)]
pub const POST_DATA_NEWER: &str = r##"---
title: What I learned after 20+ years of software development
titleHtml: What I learned after <strong>20+ years</strong> of software development
subtitle: How to be a great software engineer?
category: Career
date: 2022-04-02 12:05:00.000
readTime: 8 min
thumbnail: { src: ./thumb.jpg, alt: A winding road }
heroImage: { src: ./hero.jpg, alt: A winding road at dusk, caption: The long way }
tags: []
author: { name: Thiago, initial: T, bio: Software engineer for more than 20 years }
---

How to be a great software engineer?
"##;

#[cfg(test)]
pub const POST_DATA_MISSING_ALT: &str = r##"---
title: Draft
titleHtml: Draft
subtitle: Not ready
category: Drafts
date: 2024-02-12
readTime: 1 min
thumbnail:
  src: ./draft.jpg
heroImage: { src: ./hero.jpg, alt: Hero, caption: Caption }
tags: [draft]
author: { name: Thiago, initial: T, bio: Bio }
---

Draft body
"##;
