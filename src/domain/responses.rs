//! Pre-authored assistant replies.
//!
//! Text uses `**bold**` spans, `•` bullets and line breaks; rendering is left
//! to the presentation layer.

/// Opening assistant turn for a fresh conversation.
pub const GREETING: &str = r#"Hi! I'm your AI Interview Preparation Assistant. 🤖

I can help you prepare for interviews at specific companies by providing:
• Company-specific interview insights
• Top coding questions asked
• Interview tips and strategies
• Technical preparation guidance

Just tell me which company you're preparing for, and I'll provide tailored advice!

Example: "Help me prepare for Google software engineer interview""#;

pub const GOOGLE: &str = r#"🔍 **Google Interview Preparation**

**Interview Process:**
• Phone/Video screening (45 min)
• 4-5 onsite rounds (technical + behavioral)
• Focus on algorithms, system design, and Googleyness

**Top 3 Coding Questions:**
1. **Two Sum** (Easy) - Array manipulation and hash maps
2. **Longest Substring Without Repeating Characters** (Medium) - Sliding window technique
3. **Merge k Sorted Lists** (Hard) - Divide and conquer, heap operations

**Key Tips:**
• Practice on LeetCode (focus on medium/hard problems)
• Study system design fundamentals
• Prepare STAR format behavioral stories
• Know Google's products and culture

**Technical Focus Areas:**
• Data structures (arrays, trees, graphs)
• Algorithms (sorting, searching, dynamic programming)
• System design (for senior roles)
• Code optimization and complexity analysis"#;

pub const MICROSOFT: &str = r#"💻 **Microsoft Interview Preparation**

**Interview Process:**
• Initial screening call
• 4-5 technical rounds
• Focus on problem-solving and collaboration

**Top 3 Coding Questions:**
1. **Reverse Linked List** (Easy) - Pointer manipulation
2. **Binary Tree Level Order Traversal** (Medium) - BFS/Queue usage
3. **Design LRU Cache** (Medium) - Hash map + doubly linked list

**Key Tips:**
• Emphasize teamwork and growth mindset
• Practice system design scenarios
• Know Microsoft's cloud services (Azure)
• Prepare for behavioral questions about leadership

**Technical Focus Areas:**
• Object-oriented programming
• Database design and SQL
• Cloud computing concepts
• Software engineering best practices"#;

pub const AMAZON: &str = r#"📦 **Amazon Interview Preparation**

**Interview Process:**
• Online assessment (OA)
• 4-5 rounds including bar raiser
• Heavy focus on leadership principles

**Top 3 Coding Questions:**
1. **Two Sum** (Easy) - Hash table fundamentals
2. **Number of Islands** (Medium) - DFS/BFS graph traversal
3. **Merge Intervals** (Medium) - Array sorting and merging

**Key Tips:**
• Master Amazon's 16 Leadership Principles
• Practice STAR method for behavioral questions
• Focus on scalability in technical solutions
• Prepare examples of customer obsession

**Technical Focus Areas:**
• Algorithms and data structures
• System design and scalability
• AWS services knowledge
• Operational excellence mindset"#;

pub const META: &str = r#"👥 **Meta Interview Preparation**

**Interview Process:**
• Recruiter call
• Technical phone screen
• 4-5 onsite rounds (coding + system design)

**Top 3 Coding Questions:**
1. **Valid Parentheses** (Easy) - Stack operations
2. **Add Binary** (Easy) - String manipulation
3. **Binary Tree Vertical Order Traversal** (Medium) - Tree traversal with coordinates

**Key Tips:**
• Focus on building connections and impact
• Practice system design for social platforms
• Understand Meta's mission and products
• Prepare for culture fit questions

**Technical Focus Areas:**
• Frontend and backend development
• Database optimization
• Distributed systems
• Mobile development (React Native)"#;

/// Catalogue of common coding questions grouped by difficulty.
pub const CODING_QUESTIONS: &str = r#"💡 **Essential Coding Questions for Interviews**

**Easy Level (Master These First):**
• Two Sum
• Valid Parentheses
• Merge Two Sorted Lists
• Maximum Subarray
• Best Time to Buy and Sell Stock

**Medium Level (Core Interview Questions):**
• Longest Substring Without Repeating Characters
• 3Sum
• Container With Most Water
• Rotate Image
• Group Anagrams

**Hard Level (For Senior Positions):**
• Merge k Sorted Lists
• Trapping Rain Water
• Median of Two Sorted Arrays
• Word Ladder
• Serialize and Deserialize Binary Tree

**Practice Strategy:**
1. Start with easy problems to build confidence
2. Focus on understanding patterns, not memorizing
3. Practice explaining your approach out loud
4. Time yourself (aim for 20-30 minutes per problem)
5. Review multiple solutions for each problem"#;

pub const INTERVIEW_TIPS: &str = r#"🎯 **General Interview Preparation Tips**

**Before the Interview:**
• Research the company thoroughly
• Practice coding on a whiteboard/paper
• Prepare 3-5 behavioral stories using STAR method
• Review your resume and be ready to discuss projects

**During Technical Rounds:**
• Think out loud - explain your approach
• Ask clarifying questions
• Start with a brute force solution, then optimize
• Test your code with examples
• Discuss time/space complexity

**During Behavioral Rounds:**
• Use specific examples with measurable impact
• Show growth mindset and learning from failures
• Demonstrate leadership and collaboration
• Ask thoughtful questions about the role/team

**Common Mistakes to Avoid:**
• Jumping into coding without understanding the problem
• Not testing your solution
• Giving up too quickly on difficult problems
• Not asking questions about the company/role"#;

/// Fallback when no topic keyword matches.
pub const DEFAULT_MENU: &str = r#"I'd be happy to help you prepare for your interview! 

I can provide specific guidance for companies like:
• **Google** - Algorithm-heavy interviews
• **Microsoft** - Collaboration-focused rounds  
• **Amazon** - Leadership principles emphasis
• **Meta** - System design and social impact
• **Apple** - Product-focused technical discussions

Or I can help with:
• **Coding Questions** - Top problems by difficulty
• **Interview Tips** - Best practices and strategies
• **System Design** - Architecture and scalability
• **Behavioral Prep** - STAR method and stories

What specific area would you like to focus on?"#;
